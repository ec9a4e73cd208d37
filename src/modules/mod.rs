//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the store handle that owns trivia data.

pub mod store;
