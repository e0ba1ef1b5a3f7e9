//! Collaborator traits defined in `speakerhub-core` and implemented by
//! other crates (or by the embedding host).

pub mod media;
pub mod notify;

pub use media::MediaStore;
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
