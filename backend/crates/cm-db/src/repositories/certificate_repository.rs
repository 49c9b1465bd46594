use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::{Certificate, CertificatePatch};

use chrono::{NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Snake_case row as stored in `certificates`.
#[derive(FromRow)]
struct CertificateRow {
    id: String,
    user_id: String,
    credential_id: Option<String>,
    name: String,
    issuer: String,
    description: String,
    date: NaiveDate,
    #[sqlx(rename = "type")]
    certificate_type: String,
    image: Option<String>,
    credential_url: Option<String>,
    verified: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CertificateRow> for Certificate {
    type Error = crate::DbError;

    fn try_from(r: CertificateRow) -> DbErrorResult<Self> {
        Ok(Certificate {
            id: decode::uuid(&r.id, "certificates.id")?,
            user_id: decode::uuid(&r.user_id, "certificates.user_id")?,
            credential_id: r.credential_id,
            name: r.name,
            issuer: r.issuer,
            description: r.description,
            date: r.date,
            certificate_type: decode::enumeration(&r.certificate_type, "certificates.type")?,
            image: r.image,
            credential_url: r.credential_url,
            verified: r.verified,
            created_at: decode::timestamp(r.created_at, "certificates.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "certificates.updated_at")?,
        })
    }
}

fn into_certificates(rows: Vec<CertificateRow>) -> DbErrorResult<Vec<Certificate>> {
    rows.into_iter().map(Certificate::try_from).collect()
}

pub struct CertificateRepository;

impl CertificateRepository {
    pub async fn create<'e, E>(executor: E, certificate: &Certificate) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO certificates (
                    id, user_id, credential_id, name, issuer, description,
                    date, type, image, credential_url, verified,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(certificate.id.to_string())
        .bind(certificate.user_id.to_string())
        .bind(&certificate.credential_id)
        .bind(&certificate.name)
        .bind(&certificate.issuer)
        .bind(&certificate.description)
        .bind(certificate.date)
        .bind(certificate.certificate_type.as_str())
        .bind(&certificate.image)
        .bind(&certificate.credential_url)
        .bind(certificate.verified)
        .bind(certificate.created_at.timestamp_millis())
        .bind(certificate.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Certificate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, CertificateRow>(
            r#"
                SELECT id, user_id, credential_id, name, issuer, description,
                       date, type, image, credential_url, verified,
                       created_at, updated_at
                FROM certificates
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Certificate::try_from).transpose()
    }

    pub async fn find_by_credential_id<'e, E>(
        executor: E,
        credential_id: &str,
    ) -> DbErrorResult<Option<Certificate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, CertificateRow>(
            r#"
                SELECT id, user_id, credential_id, name, issuer, description,
                       date, type, image, credential_url, verified,
                       created_at, updated_at
                FROM certificates
                WHERE credential_id = ?
            "#,
        )
        .bind(credential_id)
        .fetch_optional(executor)
        .await?;

        row.map(Certificate::try_from).transpose()
    }

    /// Owner's records, newest first.
    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Certificate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, CertificateRow>(
            r#"
                SELECT id, user_id, credential_id, name, issuer, description,
                       date, type, image, credential_url, verified,
                       created_at, updated_at
                FROM certificates
                WHERE user_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        into_certificates(rows)
    }

    pub async fn list_all<'e, E>(executor: E) -> DbErrorResult<Vec<Certificate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, CertificateRow>(
            r#"
                SELECT id, user_id, credential_id, name, issuer, description,
                       date, type, image, credential_url, verified,
                       created_at, updated_at
                FROM certificates
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(executor)
        .await?;

        into_certificates(rows)
    }

    /// Review queue: unverified records, oldest first.
    pub async fn list_unverified<'e, E>(executor: E) -> DbErrorResult<Vec<Certificate>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, CertificateRow>(
            r#"
                SELECT id, user_id, credential_id, name, issuer, description,
                       date, type, image, credential_url, verified,
                       created_at, updated_at
                FROM certificates
                WHERE verified = 0
                ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        into_certificates(rows)
    }

    /// Applies the fields present in `patch` and refreshes `updated_at`.
    /// Returns false when no record has `id`.
    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &CertificatePatch,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE certificates
                SET credential_id = COALESCE(?, credential_id),
                    name = COALESCE(?, name),
                    issuer = COALESCE(?, issuer),
                    description = COALESCE(?, description),
                    date = COALESCE(?, date),
                    type = COALESCE(?, type),
                    image = COALESCE(?, image),
                    credential_url = COALESCE(?, credential_url),
                    verified = COALESCE(?, verified),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&patch.credential_id)
        .bind(&patch.name)
        .bind(&patch.issuer)
        .bind(&patch.description)
        .bind(patch.date)
        .bind(patch.certificate_type.map(|t| t.as_str()))
        .bind(&patch.image)
        .bind(&patch.credential_url)
        .bind(patch.verified)
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM certificates WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM certificates WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
