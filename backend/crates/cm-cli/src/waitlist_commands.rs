use clap::Subcommand;

#[derive(Subcommand)]
pub enum WaitlistCommands {
    /// Join the waitlist (joining twice is a no-op)
    Join {
        email: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// List waitlist entries, newest first
    List,
}
