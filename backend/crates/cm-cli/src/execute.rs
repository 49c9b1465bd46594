use crate::{
    CliError, CliResult, account_commands::AccountCommands, analytics_commands::AnalyticsCommands,
    certificate_commands::CertificateCommands, commands::Commands, user_commands::UserCommands,
    waitlist_commands::WaitlistCommands, wallet_commands::WalletCommands,
};

use cm_core::{CertificatePatch, NewCertificate, Session, UserPatch};
use cm_services::DataAccess;

use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value).map_err(CliError::from_json)
}

/// Runs one command and returns its camelCase JSON result.
pub async fn execute(data: &DataAccess, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Certificate { action } => certificate(data, action).await,
        Commands::Stats { user } => to_json(&data.analytics.dashboard_stats(user).await?),
        Commands::User { action } => user(data, action).await,
        Commands::Analytics { action } => match action {
            AnalyticsCommands::Show { user } => {
                to_json(&data.analytics.user_analytics(user).await?)
            }
            AnalyticsCommands::View { user } => {
                to_json(&data.analytics.record_profile_view(user).await?)
            }
            AnalyticsCommands::Share { user } => to_json(&data.analytics.record_share(user).await?),
        },
        Commands::Account { action } => match action {
            AccountCommands::Delete { user } => {
                to_json(&data.accounts.delete_account(user).await?)
            }
        },
        Commands::Waitlist { action } => match action {
            WaitlistCommands::Join { email, name } => {
                let id = data.waitlist.join(&email, name).await?;
                Ok(json!({ "id": id }))
            }
            WaitlistCommands::List => to_json(&data.waitlist.list().await?),
        },
        Commands::Wallet { action } => match action {
            WalletCommands::Show { user } => to_json(&data.wallets.get_or_create(user).await?),
            WalletCommands::Mint { user, certificate } => {
                let minted = data.wallets.mint_demo_token(user, certificate).await?;
                Ok(json!({ "minted": minted }))
            }
        },
    }
}

async fn certificate(data: &DataAccess, action: CertificateCommands) -> CliResult<Value> {
    let certificates = &data.certificates;

    match action {
        CertificateCommands::List { user } => to_json(&certificates.get_all(user).await?),
        CertificateCommands::Get { key } => to_json(&certificates.get_by_id(&key).await?),
        CertificateCommands::Add {
            user,
            name,
            issuer,
            date,
            certificate_type,
            description,
            credential_id,
            credential_url,
            image,
        } => {
            let image = match image {
                Some(path) => Some(upload_image(data, user, &path).await?),
                None => None,
            };

            let id = certificates
                .add(NewCertificate {
                    user_id: user,
                    credential_id,
                    name,
                    issuer,
                    description: description.unwrap_or_default(),
                    date,
                    certificate_type,
                    image,
                    credential_url,
                })
                .await?;
            Ok(json!({ "id": id }))
        }
        CertificateCommands::Update {
            id,
            name,
            issuer,
            description,
            date,
            certificate_type,
            credential_id,
            credential_url,
        } => {
            let patch = CertificatePatch {
                credential_id,
                name,
                issuer,
                description,
                date,
                certificate_type,
                image: None,
                credential_url,
                verified: None,
            };
            let updated = certificates.update(id, patch).await?;
            Ok(json!({ "updated": updated }))
        }
        CertificateCommands::Verify { id, revoke } => {
            let updated = certificates.set_verified(id, !revoke).await?;
            Ok(json!({ "updated": updated }))
        }
        CertificateCommands::Delete { id } => {
            let deleted = certificates.delete(id).await?;
            Ok(json!({ "deleted": deleted }))
        }
        CertificateCommands::Pending => to_json(&certificates.list_unverified().await?),
        CertificateCommands::All => to_json(&certificates.list_all().await?),
    }
}

async fn user(data: &DataAccess, action: UserCommands) -> CliResult<Value> {
    let users = &data.users;

    match action {
        UserCommands::Get { id } => to_json(&users.get(id).await?),
        UserCommands::Ensure {
            user,
            email,
            display_name,
        } => {
            let session = Session::new(user, email);
            to_json(&users.ensure_profile(&session, display_name.as_deref()).await?)
        }
        UserCommands::Update {
            id,
            display_name,
            organization,
        } => {
            let patch = UserPatch {
                display_name,
                organization,
            };
            let updated = users.update_profile(id, patch).await?;
            Ok(json!({ "updated": updated }))
        }
        UserCommands::List { role } => to_json(&users.list_by_role(role).await?),
        UserCommands::SetRole { id, role } => {
            let updated = users.set_role(id, role).await?;
            Ok(json!({ "updated": updated }))
        }
        UserCommands::Verify { id, revoke } => {
            let updated = users.set_verified(id, !revoke).await?;
            Ok(json!({ "updated": updated }))
        }
    }
}

async fn upload_image(data: &DataAccess, owner: Uuid, path: &Path) -> CliResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::io(path.to_path_buf(), e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(data
        .certificates
        .upload_image(owner, &file_name, &bytes)
        .await?)
}
