use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Show a user's counters
    Show {
        #[arg(long)]
        user: Uuid,
    },

    /// Record a profile view
    View {
        #[arg(long)]
        user: Uuid,
    },

    /// Record a profile share
    Share {
        #[arg(long)]
        user: Uuid,
    },
}
