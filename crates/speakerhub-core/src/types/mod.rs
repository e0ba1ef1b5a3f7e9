//! Shared type primitives: identifiers, pagination, and sorting.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::{ActivityId, MediaRef, SpeakerId};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::SortDirection;
