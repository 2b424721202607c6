//! Shared model and formatting logic for the schema.ini builder.
//!
//! The backend and the frontend both depend on this crate: the frontend renders
//! the live preview with [`render::render`], the backend uses the same function
//! to answer the render and download endpoints.

pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod requests;
