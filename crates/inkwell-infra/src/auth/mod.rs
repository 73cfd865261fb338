//! Authentication implementations.

mod jwt;

pub use jwt::{DEFAULT_ISSUER, JwtConfig, JwtTokenService, MAX_EXPIRATION_HOURS};
