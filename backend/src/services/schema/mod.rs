//! # Schema Service Module
//!
//! HTTP endpoints that turn a `SchemaDescriptor` posted by the form into
//! `schema.ini` text. Both handlers are thin wrappers around
//! `common::render`; no state is kept between requests.
//!
//! ## Sub-modules:
//! - `render`: returns the rendered section as JSON, with the list of dropped rows.
//! - `download`: returns the rendered section as a `schema.ini` attachment.

mod download;
mod render;

use actix_web::error::InternalError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpResponse, Scope};
use log::warn;

/// The base path for all schema-related API endpoints.
const API_PATH: &str = "/api/schema";

/// Name given to the downloaded file.
pub const SCHEMA_FILE_NAME: &str = "schema.ini";

/// Configures and returns the Actix `Scope` for the schema routes.
///
/// # Registered Routes:
///
/// *   **`POST /render`**:
///     - **Handler**: `render::process`
///     - **Description**: Accepts a JSON `SchemaDescriptor` and answers with a
///       `RenderResponse` holding the text and the indices of incomplete rows
///       that were left out.
///
/// *   **`POST /download`**:
///     - **Handler**: `download::process`
///     - **Description**: Accepts the same payload and answers with the plain
///       text marked as an attachment named `schema.ini`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/render", post().to(render::process))
        .route("/download", post().to(download::process))
}

/// JSON extractor settings shared by the schema routes.
///
/// Malformed bodies are answered with `400 Bad Request` and the parser message.
pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, _req| {
        warn!("Rejected schema payload: {}", err);
        let message = format!("Invalid schema descriptor: {}", err);
        InternalError::from_response(err, HttpResponse::BadRequest().body(message)).into()
    })
}
