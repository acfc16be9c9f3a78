use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::{account, post};
use uuid::Uuid;

use crate::types::error::AppError;

pub const POSTS_PER_PAGE: u64 = 10;

/// One page of posts joined with their owners, newest first.
pub struct PostPage {
    pub posts: Vec<(post::Model, Option<account::Model>)>,
    pub total_posts: u64,
    pub total_pages: u64,
}

/// Storage seam for accounts and posts. Handlers only see this trait, so the
/// backing engine can be swapped (Postgres in production, in-memory in tests).
///
/// Every mutation is a single-record write: a concurrent reader of the same
/// account sees either the old or the new row, never a partial one. Two
/// concurrent code issuances race on the commitment fields and the last
/// writer wins; codes are short-lived so this is accepted.
#[async_trait]
pub trait Store: Send + Sync {
    /// Create an unverified account. Duplicate email is `AlreadyExists`.
    async fn create_account(
        &self,
        email: String,
        password_hash: String,
    ) -> Result<account::Model, AppError>;

    async fn account_by_email(&self, email: &str) -> Result<Option<account::Model>, AppError>;

    async fn account_by_id(&self, id: Uuid) -> Result<Option<account::Model>, AppError>;

    /// Store a verification-code commitment, superseding any previous one.
    async fn set_verification_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Flip `verified` and clear the verification commitment in one write.
    async fn mark_verified(&self, id: Uuid) -> Result<(), AppError>;

    /// Store a forgot-password commitment, superseding any previous one.
    async fn set_forgot_password_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Replace the password hash, leaving codes and verified state alone.
    async fn set_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError>;

    /// Replace the password hash and clear the reset commitment in one write.
    async fn reset_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError>;

    async fn create_post(
        &self,
        owner_id: Uuid,
        title: String,
        description: String,
    ) -> Result<post::Model, AppError>;

    async fn post_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<(post::Model, Option<account::Model>)>, AppError>;

    /// 1-indexed; pages at or below 1 read as the first page.
    async fn list_posts(&self, page: u64) -> Result<PostPage, AppError>;

    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<post::Model, AppError>;

    async fn delete_post(&self, id: Uuid) -> Result<(), AppError>;
}
