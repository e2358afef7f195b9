//! # securelink-core
//!
//! Core crate for SecureLink. Contains configuration schemas, the
//! request-object and response-object types shared by every use case,
//! the [`UseCase`](traits::UseCase) trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SecureLink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
