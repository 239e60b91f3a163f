pub mod account_token_service;
pub mod password_hasher;
pub mod token_provider;
pub mod token_repository;
pub mod user_query;
pub mod user_repository;

pub use account_token_service::{AccountTokenService, TokenPurpose};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{SessionClaims, TokenError, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
