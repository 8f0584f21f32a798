//! Token service module for JWT management
//!
//! - JWT access and refresh token signing and verification
//! - Refresh token persistence by hash, with revocation
//! - Background cleanup of expired refresh tokens

mod cleanup;
mod config;
mod service;
mod store;

#[cfg(test)]
mod tests;

pub use cleanup::TokenCleanupService;
pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use store::RefreshTokenStore;
