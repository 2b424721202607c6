use actix_web::{web, HttpResponse, Responder};
use common::model::schema::SchemaDescriptor;
use common::render::render_report;
use common::requests::RenderResponse;
use log::{debug, warn};

/// Actix web handler for `POST /api/schema/render`.
///
/// # Returns
/// - `200 OK` with a `RenderResponse` JSON body.
/// - `400 Bad Request` when the descriptor cannot be rendered.
pub async fn process(payload: web::Json<SchemaDescriptor>) -> impl Responder {
    match render_report(&payload) {
        Ok(report) => {
            debug!(
                "Rendered {} with {} column line(s)",
                payload.filename, report.emitted_columns
            );
            HttpResponse::Ok().json(RenderResponse::from(report))
        }
        Err(e) => {
            warn!("Could not render {}: {}", payload.filename, e);
            HttpResponse::BadRequest().body(format!("Error rendering schema.ini: {}", e))
        }
    }
}
