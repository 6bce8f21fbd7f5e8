//! Image domain logic for the gallery lambdas.
//!
//! Every function here takes its clients as arguments; nothing reaches for
//! shared global state.

pub mod error;
pub mod images;
pub mod search;

pub use error::GalleryError;
