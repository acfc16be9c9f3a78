use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::account::{ActiveModel as AccountActive, Entity as Account};
use entity::post::{ActiveModel as PostActive, Entity as Post};
use entity::{account, post};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use tracing::info;
use uuid::Uuid;

use crate::db::store::{PostPage, Store, POSTS_PER_PAGE};
use crate::types::error::AppError;

#[derive(Clone)]
pub struct PostgresService {
    database_connection: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self {
            database_connection,
        })
    }
}

#[async_trait]
impl Store for PostgresService {
    async fn create_account(
        &self,
        email: String,
        password_hash: String,
    ) -> Result<account::Model, AppError> {
        let taken = Account::find()
            .filter(account::Column::Email.eq(&email))
            .count(&self.database_connection)
            .await?
            > 0;
        if taken {
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

        match Account::insert(AccountActive {
            id: Set(model.id),
            email: Set(model.email.clone()),
            password: Set(model.password.clone()),
            verified: Set(false),
            verification_code: Set(None),
            verification_code_issued_at: Set(None),
            forgot_password_code: Set(None),
            forgot_password_code_issued_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await
        {
            Ok(_) => Ok(model),
            Err(err) => {
                // the unique email index closes the check-then-insert race
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::AlreadyExists);
                }
                Err(err.into())
            }
        }
    }

    async fn account_by_email(&self, email: &str) -> Result<Option<account::Model>, AppError> {
        Ok(Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    async fn account_by_id(&self, id: Uuid) -> Result<Option<account::Model>, AppError> {
        Ok(Account::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    async fn set_verification_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let am = AccountActive {
            id: Set(id),
            verification_code: Set(Some(commitment)),
            verification_code_issued_at: Set(Some(issued_at)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.database_connection).await?;
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), AppError> {
        let am = AccountActive {
            id: Set(id),
            verified: Set(true),
            verification_code: Set(None),
            verification_code_issued_at: Set(None),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.database_connection).await?;
        Ok(())
    }

    async fn set_forgot_password_code(
        &self,
        id: Uuid,
        commitment: String,
        issued_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let am = AccountActive {
            id: Set(id),
            forgot_password_code: Set(Some(commitment)),
            forgot_password_code_issued_at: Set(Some(issued_at)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.database_connection).await?;
        Ok(())
    }

    async fn set_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError> {
        let am = AccountActive {
            id: Set(id),
            password: Set(password_hash),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.database_connection).await?;
        Ok(())
    }

    async fn reset_password(&self, id: Uuid, password_hash: String) -> Result<(), AppError> {
        let am = AccountActive {
            id: Set(id),
            password: Set(password_hash),
            forgot_password_code: Set(None),
            forgot_password_code_issued_at: Set(None),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.database_connection).await?;
        Ok(())
    }

    async fn create_post(
        &self,
        owner_id: Uuid,
        title: String,
        description: String,
    ) -> Result<post::Model, AppError> {
        let now = Utc::now();
        let model = post::Model {
            id: Uuid::new_v4(),
            title,
            description,
            owner_id,
            created_at: now,
            updated_at: now,
        };

        Post::insert(PostActive {
            id: Set(model.id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            owner_id: Set(model.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(model)
    }

    async fn post_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<(post::Model, Option<account::Model>)>, AppError> {
        Ok(Post::find_by_id(id)
            .find_also_related(Account)
            .one(&self.database_connection)
            .await?)
    }

    async fn list_posts(&self, page: u64) -> Result<PostPage, AppError> {
        let page = page.max(1);
        let total_posts = Post::find().count(&self.database_connection).await?;
        let total_pages = total_posts.div_ceil(POSTS_PER_PAGE);

        let posts = Post::find()
            .find_also_related(Account)
            .order_by_desc(post::Column::CreatedAt)
            .offset((page - 1) * POSTS_PER_PAGE)
            .limit(POSTS_PER_PAGE)
            .all(&self.database_connection)
            .await?;

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
        let am = PostActive {
            id: Set(id),
            title: Set(title),
            description: Set(description),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(am.update(&self.database_connection).await?)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let res = Post::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Post not found".to_string()));
        }
        Ok(())
    }
}
