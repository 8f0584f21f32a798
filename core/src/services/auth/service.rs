//! Main authentication service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{TokenPair, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::domain::entities::user::{normalize_email, User};
use crate::domain::value_objects::{AuthenticatedUser, LoginResult, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::password::PasswordService;
use crate::services::token::{RefreshTokenStore, TokenService};

/// Authentication service for registration, login and token rotation
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Refresh token persistence
    refresh_store: RefreshTokenStore<T>,
    /// Token service for JWT signing and verification
    token_service: Arc<TokenService>,
    /// Password hashing
    password_service: Arc<PasswordService>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_repository` - Repository for refresh token records
    /// * `token_service` - Service for JWT token management
    /// * `password_service` - Service for password hashing
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        token_service: Arc<TokenService>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repository,
            refresh_store: RefreshTokenStore::new(token_repository),
            token_service,
            password_service,
        }
    }

    /// Register a new user
    ///
    /// # Arguments
    ///
    /// * `name` - Optional display name
    /// * `email` - Login email, normalized before storage
    /// * `password` - Plaintext password, already validated by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyExists))` - Email taken
    pub async fn register(
        &self,
        name: Option<String>,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        let email = normalize_email(email);

        // Step 1: Reject known emails before paying for a hash
        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        // Step 2: Hash the password
        let password_hash = self.password_service.hash(password).await?;

        // Step 3: Persist; the repository enforces uniqueness for concurrent signups
        let user = self
            .user_repository
            .create(User::new(name, &email, password_hash))
            .await?;

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Verify credentials and open a session
    ///
    /// Unknown email and wrong password produce the same error. Any other
    /// failure is logged and reported as [`AuthError::LoginFailed`].
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResult)` - Access token, refresh token and user identity
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Bad credentials
    /// * `Err(DomainError::Auth(AuthError::LoginFailed))` - Internal failure
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        match self.try_login(email, password).await {
            Ok(result) => Ok(result),
            Err(DomainError::Auth(AuthError::InvalidCredentials)) => {
                warn!("Failed login attempt");
                Err(AuthError::InvalidCredentials.into())
            }
            Err(e) => {
                error!("Login failed: {}", e);
                Err(AuthError::LoginFailed.into())
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let email = normalize_email(email);

        // Step 1: Look up the user
        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.password_service.verify_against_dummy(password).await?;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // Step 2: Verify the password
        if !self
            .password_service
            .verify(password, &user.password_hash)
            .await?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 3 & 4: Issue and persist tokens
        let tokens = self.issue_tokens(user.id, &user.email).await?;

        info!("User {} logged in", user.id);

        // Step 5: Hand everything back to the transport layer
        Ok(LoginResult {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: AuthenticatedUser {
                id: user.id,
                email: user.email,
            },
        })
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The presented token is revoked before the replacement is issued, so
    /// each refresh token works at most once. All checks run before the
    /// revocation; a failed attempt never revokes a still-valid token.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New access and refresh tokens
    /// * `Err(DomainError::Token(_))` - Invalid, unknown, revoked or expired token,
    ///   or the owner no longer exists
    pub async fn refresh_token(&self, raw_token: &str) -> DomainResult<TokenPair> {
        // Step 1: Cryptographic verification
        let claims = self.token_service.verify_refresh_token(raw_token)?;

        // Step 2: Stored record
        let stored = self
            .refresh_store
            .find_by_token(raw_token)
            .await
            .ok_or(TokenError::RefreshTokenNotFound)?;

        // Step 3: Already consumed or logged out
        if stored.record.is_revoked {
            warn!(
                "Revoked refresh token presented for user {}",
                stored.record.user_id
            );
            return Err(TokenError::RefreshTokenRevoked.into());
        }

        // Step 4: Store-side expiry
        if stored.record.is_expired() {
            return Err(TokenError::RefreshTokenExpired.into());
        }

        // Step 5: Owner still exists
        let user = self
            .user_repository
            .find_by_id(claims.user_id)
            .await?
            .ok_or(TokenError::OwnerNotFound)?;

        // Step 6: Revoke; losing the compare-and-set means a concurrent rotation won
        if !self.refresh_store.revoke_by_token(raw_token).await? {
            warn!("Refresh token replay detected for user {}", user.id);
            return Err(TokenError::RefreshTokenRevoked.into());
        }

        // Step 7 & 8: Issue and persist the replacement
        let tokens = self.issue_tokens(user.id, &user.email).await?;
        info!("Rotated refresh token for user {}", user.id);

        Ok(tokens)
    }

    /// Revoke a single refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The token was active and is now revoked
    /// * `Ok(false)` - Unknown or already revoked token
    pub async fn logout(&self, raw_token: &str) -> DomainResult<bool> {
        let revoked = self.refresh_store.revoke_by_token(raw_token).await?;
        if revoked {
            info!("Refresh token revoked on logout");
        }
        Ok(revoked)
    }

    /// Revoke every refresh token of a user
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens revoked
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<usize> {
        let count = self.refresh_store.revoke_all_by_user_id(user_id).await?;
        info!("Revoked {} refresh tokens for user {}", count, user_id);
        Ok(count)
    }

    /// Profile of an authenticated user
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - Public user fields
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - Account no longer exists
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(UserProfile::from(&user))
    }

    /// Sign a token pair and persist the refresh half
    ///
    /// The stored record always expires after [`REFRESH_TOKEN_EXPIRY_DAYS`],
    /// whatever lifetime the signed token carries.
    async fn issue_tokens(&self, user_id: Uuid, email: &str) -> DomainResult<TokenPair> {
        let tokens = self.token_service.generate_token_pair(user_id, email)?;
        let expires_at = Utc::now() + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);

        self.refresh_store
            .save(&tokens.refresh_token, user_id, expires_at)
            .await?;

        Ok(tokens)
    }
}
