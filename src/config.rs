use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub token_secret: String,
    pub hmac_secret: String,
    pub hash_cost: u32,
    pub production: bool,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub sender: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            token_secret: Self::get_env("TOKEN_SECRET"),
            hmac_secret: Self::get_env("HMAC_VERIFICATION_CODE_SECRET"),
            hash_cost: env::var("HASH_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            production: env::var("NODE_ENV").map(|v| v == "production").unwrap_or(false),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: env::var("RESEND_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                sender: Self::get_env("MAIL_FROM"),
            },
        }
    }
}
