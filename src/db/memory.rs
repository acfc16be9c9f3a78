use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::{account, post};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::store::{PostPage, Store, POSTS_PER_PAGE};
use crate::types::error::AppError;

#[derive(Default)]
struct StoreData {
    accounts: HashMap<Uuid, account::Model>,
    posts: HashMap<Uuid, post::Model>,
}

/// HashMap-backed `Store`. Every operation holds the single lock for its
/// whole duration, which gives the same per-record write atomicity as the
/// SQL backend. Used by the integration tests; also handy as a throwaway
/// backend when no database is around.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_account(
        &self,
        email: String,
        password_hash: String,
    ) -> Result<account::Model, AppError> {
        let mut data = self.data.lock().await;
        if data.accounts.values().any(|a| a.email == email) {
            return Err(AppError::AlreadyExists);
        }

        let now = Utc::now();
        let model = account::Model {
            id: Uuid::new_v4(),
            email,
            password: password_hash,
            verified: false,
            verification_code: None,
            verification_code_issued_at: None,
            forgot_password_code: None,
            forgot_password_code_issued_at: None,
            created_at: now,
            updated_at: now,
        };
        data.accounts.insert(model.id, model.clone());
        Ok(model)
    }

    async fn account_by_email(&self, email: &str) -> Result<Option<account::Model>, AppError> {
        let data = self.data.lock().await;
        Ok(data.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn account_by_id(&self, id: Uuid) -> Result<Option<account::Model>, AppError> {
        let data = self.data.lock().await;
        Ok(data.accounts.get(&id).cloned())
    }

    async fn set_verification_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
        account.verification_code = Some(commitment);
        account.verification_code_issued_at = Some(issued_at);
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
        account.verified = true;
        account.verification_code = None;
        account.verification_code_issued_at = None;
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn set_forgot_password_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
        account.forgot_password_code = Some(commitment);
        account.forgot_password_code_issued_at = Some(issued_at);
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn set_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
        account.password = password_hash;
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn reset_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        let account = data
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
        account.password = password_hash;
        account.forgot_password_code = None;
        account.forgot_password_code_issued_at = None;
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn create_post(
        &self,
        owner_id: Uuid,
        title: String,
        description: String,
    ) -> Result<post::Model, AppError> {
        let mut data = self.data.lock().await;
        let now = Utc::now();
        let model = post::Model {
            id: Uuid::new_v4(),
            title,
            description,
            owner_id,
            created_at: now,
            updated_at: now,
        };
        data.posts.insert(model.id, model.clone());
        Ok(model)
    }

    async fn post_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<(post::Model, Option<account::Model>)>, AppError> {
        let data = self.data.lock().await;
        Ok(data.posts.get(&id).map(|p| {
            let owner = data.accounts.get(&p.owner_id).cloned();
            (p.clone(), owner)
        }))
    }

    async fn list_posts(&self, page: u64) -> Result<PostPage, AppError> {
        let data = self.data.lock().await;
        let page = page.max(1);

        let mut all: Vec<&post::Model> = data.posts.values().collect();
        // newest first; id as a tiebreak keeps paging deterministic
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total_posts = all.len() as u64;
        let total_pages = total_posts.div_ceil(POSTS_PER_PAGE);

        let posts = all
            .into_iter()
            .skip(((page - 1) * POSTS_PER_PAGE) as usize)
            .take(POSTS_PER_PAGE as usize)
            .map(|p| {
                let owner = data.accounts.get(&p.owner_id).cloned();
                (p.clone(), owner)
            })
            .collect();

        Ok(PostPage {
            posts,
            total_posts,
            total_pages,
        })
    }

    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<post::Model, AppError> {
        let mut data = self.data.lock().await;
        let post = data
            .posts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        post.title = title;
        post.description = description;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let mut data = self.data.lock().await;
        if data.posts.remove(&id).is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }
        Ok(())
    }
}
