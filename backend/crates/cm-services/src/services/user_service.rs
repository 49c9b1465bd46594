//! User profiles (document store, `users` collection).
//!
//! Documents are keyed by the identity provider's user id and keep camelCase keys.
//! Roles are written in canonical form; legacy spellings already in the store are
//! mapped on read, and `list_by_role` matches every spelling of a role.

use crate::cache::ReadCache;
use crate::services::documents::{decode, encode, present_fields};
use crate::store_call::StoreCall;
use crate::{ServiceError, ServiceResult};

use cm_core::{Session, User, UserPatch, UserRole};
use cm_db::{Collection, DocumentRepository};

use std::sync::Arc;

use log::info;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

pub(crate) fn user_cache_key(user_id: Uuid) -> String {
    format!("users:{}", user_id)
}

pub struct UserService {
    pool: SqlitePool,
    store: StoreCall,
    cache: Arc<dyn ReadCache<User>>,
}

impl UserService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall, cache: Arc<dyn ReadCache<User>>) -> Self {
        Self { pool, store, cache }
    }

    pub async fn get(&self, user_id: Uuid) -> ServiceResult<Option<User>> {
        let key = user_cache_key(user_id);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(Some(cached));
        }

        let user = self.fetch(user_id).await?;
        if let Some(user) = &user {
            self.cache.put(&key, user.clone()).await;
        }
        Ok(user)
    }

    /// Returns the stored profile, creating a default one for a first sign-in.
    pub async fn ensure_profile(
        &self,
        session: &Session,
        display_name: Option<&str>,
    ) -> ServiceResult<User> {
        let display_name = match display_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => default_display_name(&session.email),
        };
        let user = User::new(session.user_id, session.email.clone(), display_name);
        let id = session.user_id.to_string();
        let body = encode(&user)?;

        let created = self
            .store
            .run(
                "users.create",
                DocumentRepository::create(&self.pool, Collection::Users, &id, &body),
            )
            .await?;

        if created {
            info!("Created profile for {}", session.user_id);
            return Ok(user);
        }

        match self.fetch(session.user_id).await? {
            Some(existing) => Ok(existing),
            None => {
                // Deleted between the insert attempt and the read.
                self.store
                    .run(
                        "users.set",
                        DocumentRepository::set(&self.pool, Collection::Users, &id, &body),
                    )
                    .await?;
                Ok(user)
            }
        }
    }

    /// Applies the fields present in `patch`. Returns false if the profile does not exist.
    pub async fn update_profile(&self, user_id: Uuid, patch: UserPatch) -> ServiceResult<bool> {
        if let Some(name) = &patch.display_name
            && name.trim().is_empty()
        {
            return Err(ServiceError::validation("displayName must not be empty"));
        }

        self.merge(user_id, "users.update_profile", present_fields(&patch)?)
            .await
    }

    /// Administrative role change.
    pub async fn set_role(&self, user_id: Uuid, role: UserRole) -> ServiceResult<bool> {
        let mut fields = Map::new();
        fields.insert("role".to_string(), encode(&role)?);

        let updated = self.merge(user_id, "users.set_role", fields).await?;
        if updated {
            info!("User {} role set to {}", user_id, role);
        }
        Ok(updated)
    }

    pub async fn set_verified(&self, user_id: Uuid, verified: bool) -> ServiceResult<bool> {
        let mut fields = Map::new();
        fields.insert("verified".to_string(), Value::Bool(verified));

        self.merge(user_id, "users.set_verified", fields).await
    }

    /// Users holding `role` under any of its spellings, newest first.
    pub async fn list_by_role(&self, role: UserRole) -> ServiceResult<Vec<User>> {
        let documents = self
            .store
            .run(
                "users.find_by_role",
                DocumentRepository::find_where(&self.pool, Collection::Users, "role", role.aliases()),
            )
            .await?;

        documents.into_iter().map(decode).collect()
    }

    pub async fn list_students(&self) -> ServiceResult<Vec<User>> {
        self.list_by_role(UserRole::Student).await
    }

    pub async fn list_teachers(&self) -> ServiceResult<Vec<User>> {
        self.list_by_role(UserRole::Teacher).await
    }

    pub async fn list_organizations(&self) -> ServiceResult<Vec<User>> {
        self.list_by_role(UserRole::OrgAdmin).await
    }

    pub async fn delete(&self, user_id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "users.delete",
                DocumentRepository::delete(&self.pool, Collection::Users, &user_id.to_string()),
            )
            .await
    }

    async fn fetch(&self, user_id: Uuid) -> ServiceResult<Option<User>> {
        let document = self
            .store
            .run(
                "users.get",
                DocumentRepository::get(&self.pool, Collection::Users, &user_id.to_string()),
            )
            .await?;

        document.map(decode).transpose()
    }

    async fn merge(
        &self,
        user_id: Uuid,
        operation: &'static str,
        mut fields: Map<String, Value>,
    ) -> ServiceResult<bool> {
        fields.insert(
            "updatedAt".to_string(),
            encode(&cm_core::timestamp::now())?,
        );

        self.store
            .run(
                operation,
                DocumentRepository::merge(
                    &self.pool,
                    Collection::Users,
                    &user_id.to_string(),
                    &fields,
                ),
            )
            .await
    }
}

fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
