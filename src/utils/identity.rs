use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};

use crate::{
    config::EnvConfig,
    types::{claims::SessionClaims, error::AppError},
    utils::token::validate_session,
};

/// The authenticated caller, pulled from `Authorization: Bearer <token>` or
/// from the `Authorization` cookie. The cookie reuses the header shape
/// (`Bearer <token>`) for compatibility; the header wins when both exist.
pub struct Identity(pub SessionClaims);

fn bearer_value(raw: &str) -> Option<&str> {
    let mut parts = raw.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) if !token.is_empty() => Some(token),
        _ => None,
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let header_token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_value)
            .map(str::to_owned);

        let cookie_token = req
            .cookie("Authorization")
            .and_then(|c| bearer_value(c.value()).map(str::to_owned));

        let Some(config) = req.app_data::<web::Data<EnvConfig>>() else {
            return ready(Err(AppError::Internal("server config missing".to_string())));
        };

        let result = match header_token.or(cookie_token) {
            Some(token) => validate_session(&token, &config.token_secret),
            None => Err(AppError::Unauthorized("Unauthorized".to_string())),
        };
        ready(result.map(Identity))
    }
}
