use cm_core::CertificateType;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum CertificateCommands {
    /// List an owner's certificates, newest first
    List {
        /// Owner user ID (UUID)
        #[arg(long)]
        user: Uuid,
    },

    /// Get a certificate by ID or credential ID
    Get {
        /// Certificate ID (UUID) or shareable credential ID
        key: String,
    },

    /// Add a certificate
    Add {
        /// Owner user ID (UUID)
        #[arg(long)]
        user: Uuid,

        #[arg(long)]
        name: String,

        #[arg(long)]
        issuer: String,

        /// Issue date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// certificate, diploma or badge
        #[arg(long = "type", default_value = "certificate")]
        certificate_type: CertificateType,

        #[arg(long)]
        description: Option<String>,

        /// Shareable lookup key
        #[arg(long)]
        credential_id: Option<String>,

        /// External verification link
        #[arg(long)]
        credential_url: Option<String>,

        /// Image file to upload to object storage
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update a certificate (only the given fields change)
    Update {
        /// Certificate ID (UUID)
        id: Uuid,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        issuer: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Issue date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "type")]
        certificate_type: Option<CertificateType>,

        #[arg(long)]
        credential_id: Option<String>,

        #[arg(long)]
        credential_url: Option<String>,
    },

    /// Mark a certificate verified (admin)
    Verify {
        /// Certificate ID (UUID)
        id: Uuid,

        /// Clear the verified flag instead
        #[arg(long)]
        revoke: bool,
    },

    /// Delete a certificate
    Delete {
        /// Certificate ID (UUID)
        id: Uuid,
    },

    /// Unverified certificates awaiting review, oldest first (admin)
    Pending,

    /// Every certificate across all owners (admin)
    All,
}
