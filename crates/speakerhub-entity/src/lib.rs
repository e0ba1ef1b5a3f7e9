//! # speakerhub-entity
//!
//! Domain entity models for SpeakerHub: speaker records and their create /
//! update drafts, activities from the host platform, and the export
//! projection.

pub mod activity;
pub mod export;
pub mod speaker;

pub use activity::Activity;
pub use export::SpeakerExport;
pub use speaker::{
    ImagePatch, NewSpeaker, OrderEntry, SocialLinks, SocialPlatform, Speaker, SpeakerPatch,
};
