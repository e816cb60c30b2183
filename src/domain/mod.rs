//! Domain layer: entities, validation, and error taxonomies. No I/O.

pub mod foundation;
pub mod user;
