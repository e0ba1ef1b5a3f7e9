//! # speakerhub-core
//!
//! Core crate for SpeakerHub. Contains collaborator traits, configuration
//! schemas, typed identifiers, pagination/sorting types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other SpeakerHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
