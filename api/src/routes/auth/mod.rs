//! Authentication route handlers
//!
//! - Registration and login
//! - Refresh token rotation through the `refreshToken` cookie
//! - Profile lookup
//! - Logout for one session or all of them

pub mod cookie;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;
