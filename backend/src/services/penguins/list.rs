use super::{respond, run_blocking};
use crate::db::PenguinRepository;
use actix_web::http::StatusCode;
use actix_web::{web, Responder};

/// Actix web handler for `GET /api/penguins`.
///
/// An empty catalog is a success with an empty `data` array.
pub async fn process(repo: web::Data<PenguinRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();
    respond(run_blocking(move || repo.list()).await, StatusCode::OK)
}
