//! Projects domain layer: identifiers, on-disk state, validation, entities

pub mod diagnostics;
pub mod entities;
pub mod identifier;
pub mod on_disk;
pub mod schema;
pub mod slashed_path;
pub mod state;
pub mod timeline;
pub mod validation;
