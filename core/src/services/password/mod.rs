//! Password hashing module
//!
//! One-way bcrypt hashing and verification of user credentials.

mod service;

pub use service::PasswordService;
