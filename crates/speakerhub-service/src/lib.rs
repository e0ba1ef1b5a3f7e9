//! # speakerhub-service
//!
//! Business logic for SpeakerHub: the speaker directory store with its
//! derived list views, the add/edit record editor with two-phase save,
//! the export projection, and the read-only display widget query path.

pub mod directory;
pub mod display;
pub mod editor;
pub mod export;
pub mod validate;
pub mod views;

pub use directory::{DirectoryStore, MoveDirection};
pub use display::{SpeakerDetail, SpeakerWidget, WidgetSelector};
pub use editor::{EditorMode, EditorSession, ImageAction, SaveOutcome, SpeakerForm};
pub use validate::SocialValidator;
pub use views::{ListQuery, SortSpec, SpeakerSortField};
