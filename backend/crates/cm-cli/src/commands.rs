use crate::{
    account_commands::AccountCommands, analytics_commands::AnalyticsCommands,
    certificate_commands::CertificateCommands, user_commands::UserCommands,
    waitlist_commands::WaitlistCommands, wallet_commands::WalletCommands,
};

use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    /// Credential record operations
    Certificate {
        #[command(subcommand)]
        action: CertificateCommands,
    },

    /// Dashboard summary for one owner
    Stats {
        /// Owner user ID (UUID)
        #[arg(long)]
        user: Uuid,
    },

    /// User profile operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Profile view and share counters
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },

    /// Account lifecycle
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Waitlist operations
    Waitlist {
        #[command(subcommand)]
        action: WaitlistCommands,
    },

    /// Demo wallet (placeholder, no real custody)
    Wallet {
        #[command(subcommand)]
        action: WalletCommands,
    },
}
