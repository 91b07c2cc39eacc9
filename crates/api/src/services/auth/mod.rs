//! Authentication service.
//!
//! Provides user signup and login against the `users` collection. Passwords
//! are stored as salted bcrypt hashes; the plaintext never reaches the store.

mod error;

pub use error::AuthError;

use mongodb::Database;

use crescendo_core::Username;

use crate::db::users::UserRepository;
use crate::models::user::User;

/// bcrypt cost factor (2^10 rounds).
const BCRYPT_COST: u32 = 10;

/// Authentication service.
///
/// Handles user registration and credential verification. No session or
/// token is established on login; the check is a boolean outcome.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }

    /// Register a new user.
    ///
    /// Username uniqueness is checked here, by lookup, before the insert -
    /// the store itself has no unique constraint on `userName`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::UsernameTaken` if the username is already registered.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        email_address: &str,
    ) -> Result<User, AuthError> {
        let username = Username::parse(username)?;

        if self
            .users
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = hash_password(password.to_owned()).await?;

        let user = self
            .users
            .create(User {
                id: None,
                user_name: username.into_inner(),
                password: password_hash,
                email_address: email_address.to_owned(),
            })
            .await?;

        Ok(user)
    }

    /// Verify login credentials.
    ///
    /// An unknown username and a wrong password both fail with
    /// `AuthError::InvalidCredentials` - the two cases are indistinguishable
    /// to the caller, so usernames cannot be enumerated through this path.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if verify_password(password.to_owned(), user.password).await? {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Hash a password with bcrypt.
///
/// Runs in `spawn_blocking` - bcrypt at cost 10 is CPU-bound and would stall
/// the async runtime if run inline.
async fn hash_password(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|_| AuthError::PasswordHash)?
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored bcrypt hash.
///
/// Runs in `spawn_blocking` for the same reason as [`hash_password`].
async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|_| AuthError::PasswordHash)?
        .map_err(|_| AuthError::PasswordHash)
}
