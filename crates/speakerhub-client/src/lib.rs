//! # speakerhub-client
//!
//! Remote adapters for SpeakerHub: the [`SpeakerCollection`] and
//! [`ActivityDirectory`] traits with their HTTP implementations, response
//! shape normalization, and the HTTP media store.

pub mod http;
pub mod media;
pub mod shape;
pub mod traits;

pub use http::{HttpActivityDirectory, HttpSpeakerCollection};
pub use media::HttpMediaStore;
pub use traits::{ActivityDirectory, SpeakerCollection};
