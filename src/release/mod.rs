//! Release records and the store the parser writes into.

pub mod model;
pub mod store;

pub use model::{Commit, NoteCategory, Release, ReleaseNotes};
pub use store::ReleaseStore;
