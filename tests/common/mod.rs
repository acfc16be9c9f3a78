use std::sync::Arc;

use bulletin::config::{EnvConfig, MailConfig};
use bulletin::db::memory::MemoryStore;

pub mod client;
pub mod mailer;

pub struct TestContext {
    pub db: Arc<MemoryStore>,
    pub mailer: Arc<mailer::MockMailer>,
    pub config: EnvConfig,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            db: Arc::new(MemoryStore::new()),
            mailer: Arc::new(mailer::MockMailer::new()),
            config: get_test_config(),
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        token_secret: "test-token-secret".to_string(),
        hmac_secret: "test-hmac-secret".to_string(),
        hash_cost: 10,
        production: false,
        mail: MailConfig {
            api_key: "test".to_string(),
            endpoint: "http://localhost/unused".to_string(),
            sender: "noreply@bulletin.test".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use uuid::Uuid;

    pub const PASSWORD: &str = "Abcdefg1";

    pub fn sample_email() -> String {
        format!("user-{}@test.com", Uuid::new_v4())
    }
}
