use super::{respond, run_blocking};
use crate::db::PenguinRepository;
use actix_web::http::StatusCode;
use actix_web::{web, Responder};
use common::model::penguin::PenguinFields;
use log::info;

/// Actix web handler for `POST /api/penguins`.
///
/// Expects every record field except `id` as JSON. Answers `201 Created` with the
/// stored record, or `400 Bad Request` when a required field is blank.
pub async fn process(
    repo: web::Data<PenguinRepository>,
    payload: web::Json<PenguinFields>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let fields = payload.into_inner();
    info!("Creating penguin '{}'", fields.species);
    respond(
        run_blocking(move || repo.create(fields)).await,
        StatusCode::CREATED,
    )
}
