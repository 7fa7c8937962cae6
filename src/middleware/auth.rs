/// Identity boundary: the gateway authenticates the caller and forwards the
/// user id in the `X-User-Id` header. This extractor only parses it; token
/// verification is the identity service's job.
use crate::error::AppError;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated actor identity for a request.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(AuthenticatedUser)
            .ok_or_else(|| {
                AppError::Unauthorized("missing or invalid X-User-Id header".into())
            });
        ready(user)
    }
}
