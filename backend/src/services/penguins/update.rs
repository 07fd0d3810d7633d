use super::{respond, run_blocking};
use crate::db::PenguinRepository;
use actix_web::http::StatusCode;
use actix_web::{web, Responder};
use common::model::penguin::PenguinPatch;

/// Actix web handler for `PUT /api/penguins/{id}`.
///
/// # Returns
/// - `200 OK` with the updated record.
/// - `404 Not Found` if no record has that id.
/// - `400 Bad Request` if the patch would blank a required field.
pub async fn process(
    repo: web::Data<PenguinRepository>,
    id: web::Path<String>,
    payload: web::Json<PenguinPatch>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();
    let patch = payload.into_inner();
    respond(
        run_blocking(move || repo.update(&id, &patch)).await,
        StatusCode::OK,
    )
}
