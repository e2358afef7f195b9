//! Core traits defined in `securelink-core` and implemented by other crates.

pub mod use_case;

pub use use_case::UseCase;
