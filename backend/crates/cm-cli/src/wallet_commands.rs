use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Show (creating if needed) a user's demo wallet
    Show {
        #[arg(long)]
        user: Uuid,
    },

    /// Record a demo token for one of the user's certificates
    Mint {
        #[arg(long)]
        user: Uuid,

        /// Certificate ID (UUID)
        #[arg(long)]
        certificate: Uuid,
    },
}
