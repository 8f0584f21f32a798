//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signing material for one token class
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Service for issuing and verifying access and refresh JWTs
///
/// Signing and verification are pure; nothing here touches storage.
pub struct TokenService {
    config: TokenServiceConfig,
    access_keys: SigningKeys,
    refresh_keys: SigningKeys,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            access_keys: SigningKeys::from_secret(&config.access_secret),
            refresh_keys: SigningKeys::from_secret(&config.refresh_secret),
            config,
            validation,
        }
    }

    /// Generates an access token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed JWT with `type = "access"`
    /// * `Err(DomainError)` - Signing failed
    pub fn generate_access_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new(
            user_id,
            email,
            TokenType::Access,
            self.config.access_token_expiry_secs,
        );
        self.encode_jwt(&claims, &self.access_keys)
    }

    /// Generates a refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed JWT with `type = "refresh"`
    /// * `Err(DomainError)` - Signing failed
    pub fn generate_refresh_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new(
            user_id,
            email,
            TokenType::Refresh,
            self.config.refresh_token_expiry_secs,
        );
        self.encode_jwt(&claims, &self.refresh_keys)
    }

    /// Generates a new access + refresh token pair
    pub fn generate_token_pair(&self, user_id: Uuid, email: &str) -> Result<TokenPair, DomainError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user_id, email)?,
            refresh_token: self.generate_refresh_token(user_id, email)?,
        })
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidAccessToken)` - Bad signature, expired,
    ///   malformed, or not an access token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_jwt(token, &self.access_keys, TokenType::Access)
            .ok_or(TokenError::InvalidAccessToken)
    }

    /// Verifies a refresh token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidRefreshToken)` - Bad signature, expired,
    ///   malformed, or not a refresh token
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_jwt(token, &self.refresh_keys, TokenType::Refresh)
            .ok_or(TokenError::InvalidRefreshToken)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims, keys: &SigningKeys) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &keys.encoding)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes a JWT; every failure cause collapses into `None`
    fn decode_jwt(&self, token: &str, keys: &SigningKeys, expected: TokenType) -> Option<Claims> {
        let claims = match decode::<Claims>(token, &keys.decoding, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!("Rejected {:?} token: {}", expected, e);
                return None;
            }
        };

        if claims.token_type != expected {
            debug!("Rejected token of type {:?}, expected {:?}", claims.token_type, expected);
            return None;
        }

        Some(claims)
    }
}
