//! Authentication service module
//!
//! - Registration with hashed credentials
//! - Login issuing access and refresh tokens
//! - Single-use refresh token rotation
//! - Logout and logout-everywhere

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
