use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Delete an account and everything it owns
    Delete {
        /// User ID (UUID)
        #[arg(long)]
        user: Uuid,
    },
}
