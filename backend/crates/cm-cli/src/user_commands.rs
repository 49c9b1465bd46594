use cm_core::UserRole;

use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Get a user profile
    Get {
        /// User ID (UUID)
        id: Uuid,
    },

    /// Create the profile for a signed-in user if it does not exist yet
    Ensure {
        /// User ID from the identity provider (UUID)
        #[arg(long)]
        user: Uuid,

        #[arg(long)]
        email: String,

        #[arg(long)]
        display_name: Option<String>,
    },

    /// Update profile fields
    Update {
        /// User ID (UUID)
        id: Uuid,

        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        organization: Option<String>,
    },

    /// List users holding a role
    List {
        /// student, teacher, org_admin or super_admin (legacy spellings accepted)
        #[arg(long)]
        role: UserRole,
    },

    /// Change a user's role (admin)
    SetRole {
        /// User ID (UUID)
        id: Uuid,

        role: UserRole,
    },

    /// Mark a user verified (admin)
    Verify {
        /// User ID (UUID)
        id: Uuid,

        /// Clear the verified flag instead
        #[arg(long)]
        revoke: bool,
    },
}
