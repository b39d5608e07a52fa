//! Infrastructure layer: concrete adapters behind domain traits.

pub mod persistence;
