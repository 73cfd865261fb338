//! Bearer token extraction.
//!
//! A request is anonymous unless its `Authorization` header carries a token
//! after the scheme (`Bearer <token>`). A token that is present but invalid
//! or expired rejects the request with 401 before any resolver runs.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use inkwell_core::ports::{AuthError, TokenClaims};

use crate::state::AppState;

/// Verified token identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author_id: Uuid,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            author_id: claims.author_id,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::TokenExpired | AuthError::InvalidToken(_) | AuthError::MissingAuth => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            AuthError::Encoding(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use inkwell_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired").with_detail(
                "Your authentication token has expired. Create a new author to obtain one.",
            ),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
            AuthError::Encoding(msg) => {
                tracing::error!("Token service error: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

fn identify(req: &HttpRequest) -> Result<Identity, AuthenticationError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AuthenticationError(AuthError::Encoding(
            "Server configuration error".to_string(),
        )));
    };

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        AuthenticationError(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    // `Bearer` with nothing after it carries no credential.
    let Some((scheme, token)) = auth_str
        .trim()
        .split_once(' ')
        .map(|(scheme, token)| (scheme, token.trim()))
        .filter(|(_, token)| !token.is_empty())
    else {
        return Err(AuthenticationError(AuthError::MissingAuth));
    };

    if scheme != "Bearer" {
        return Err(AuthenticationError(AuthError::InvalidToken(
            "Expected Bearer token".to_string(),
        )));
    }

    state
        .blog
        .tokens()
        .validate_token(token)
        .map(Identity::from)
        .map_err(AuthenticationError)
}

/// Identity extractor that tolerates a missing header but not a bad token.
///
/// ```ignore
/// async fn handler(identity: OptionalIdentity) -> impl Responder {
///     match identity.0 {
///         Some(id) => format!("author {}", id.author_id),
///         None => "anonymous".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match identify(req) {
            Ok(identity) => ready(Ok(OptionalIdentity(Some(identity)))),
            Err(AuthenticationError(AuthError::MissingAuth)) => ready(Ok(OptionalIdentity(None))),
            Err(e) => ready(Err(e)),
        }
    }
}
