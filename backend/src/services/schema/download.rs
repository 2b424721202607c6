use super::SCHEMA_FILE_NAME;
use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse, Responder};
use common::model::schema::SchemaDescriptor;
use common::render::render;
use log::{info, warn};

/// Actix web handler for `POST /api/schema/download`.
///
/// Renders the descriptor and serves it as `schema.ini`, whatever the name of
/// the data file in the section header is.
pub async fn process(payload: web::Json<SchemaDescriptor>) -> impl Responder {
    match render(&payload) {
        Ok(content) => {
            info!("Serving {} for [{}]", SCHEMA_FILE_NAME, payload.filename);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .insert_header(ContentDisposition::attachment(SCHEMA_FILE_NAME))
                .body(content)
        }
        Err(e) => {
            warn!("Could not render {}: {}", payload.filename, e);
            HttpResponse::BadRequest().body(format!("Error rendering schema.ini: {}", e))
        }
    }
}
