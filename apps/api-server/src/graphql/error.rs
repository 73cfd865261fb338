use async_graphql::{Error, ErrorExtensions, value};
use inkwell_core::DomainError;

/// Map a domain failure onto a GraphQL error with an `extensions.code`.
///
/// Repository and token failures are logged and reported without detail.
pub fn graphql_error(err: DomainError) -> Error {
    match err {
        DomainError::Unauthenticated(msg) => Error::new(msg).extend_with(|_, e| {
            e.set("code", "UNAUTHENTICATED");
            e.set("http", value!({ "status": 401 }));
        }),
        DomainError::Validation(msg) => {
            Error::new(msg).extend_with(|_, e| e.set("code", "BAD_USER_INPUT"))
        }
        DomainError::Repository(err) => {
            tracing::error!(error = %err, "Repository failure in resolver");
            internal()
        }
        DomainError::Token(err) => {
            tracing::error!(error = %err, "Token failure in resolver");
            internal()
        }
    }
}

fn internal() -> Error {
    Error::new("Internal server error").extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
}
