use std::sync::Arc;

use actix_web::{web, App};
use bulletin::config::EnvConfig;
use bulletin::db::memory::MemoryStore;
use bulletin::db::store::Store;
use bulletin::utils::hashing::hash_password;
use bulletin::utils::mail::Mailer;
use bulletin::utils::token::issue_session;
use uuid::Uuid;

use super::{mailer::MockMailer, TestContext};

pub struct TestClient {
    pub db: Arc<MemoryStore>,
    pub mailer: Arc<MockMailer>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            db: Arc::clone(&ctx.db),
            mailer: Arc::clone(&ctx.mailer),
            config: ctx.config.clone(),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let store: Arc<dyn Store> = self.db.clone();
        let mailer: Arc<dyn Mailer> = self.mailer.clone();
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(store))
            .app_data(web::Data::new(mailer))
            .configure(bulletin::routes::configure_routes)
    }

    /// Seed an account straight through the store, skipping the HTTP surface.
    #[allow(dead_code)]
    pub async fn create_test_account(
        &self,
        email: &str,
        password: &str,
        verified: bool,
    ) -> entity::account::Model {
        let hashed = hash_password(password, self.config.hash_cost).expect("hash test password");
        let account = self
            .db
            .create_account(email.to_string(), hashed)
            .await
            .expect("create test account");

        if verified {
            self.db.mark_verified(account.id).await.expect("mark verified");
            return self
                .db
                .account_by_id(account.id)
                .await
                .expect("reload account")
                .expect("account exists");
        }
        account
    }

    /// A signed session for an already-seeded account.
    #[allow(dead_code)]
    pub async fn session_for(&self, account_id: Uuid) -> String {
        let account = self
            .db
            .account_by_id(account_id)
            .await
            .expect("load account")
            .expect("account exists");
        issue_session(&account, &self.config.token_secret).expect("issue session")
    }
}
