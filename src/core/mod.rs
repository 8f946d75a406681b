//! Package data model and the snapshot diff engine

pub mod compose_version;
pub mod diff;
pub mod nevra;
pub mod snapshot;
