//! # Penguin Record Store API
//!
//! HTTP face of the record store the catalog page talks to. Every endpoint
//! answers with a `common::responses::ApiResponse` envelope so the browser
//! client can treat `success = false` and transport failures alike.
//!
//! ## Sub-modules:
//! - `list`: returns every record in insertion order.
//! - `create`: persists a new record and returns it with its assigned id.
//! - `update`: applies a partial update to an existing record.
//!
//! There is deliberately no delete route.

mod create;
mod list;
mod update;

use crate::db::DbError;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::web::{self, get, post, put, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use common::responses::ApiResponse;
use log::{error, warn};
use serde::Serialize;

/// The base path for all penguin endpoints.
const API_PATH: &str = "/api/penguins";

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for the penguin routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/penguins`** → `list::process`
/// *   **`POST /api/penguins`** → `create::process`, body: `PenguinFields`
/// *   **`PUT /api/penguins/{id}`** → `update::process`, body: `PenguinPatch`
///
/// Bodies that fail to parse are answered with a `400` envelope as well.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(
            web::JsonConfig::default()
                .limit(JSON_LIMIT)
                .error_handler(reject_payload),
        )
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", put().to(update::process))
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("rejected body for {} {}: {}", req.method(), req.path(), err);
    let body = ApiResponse::<()>::failure(err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Runs a blocking repository call on Actix's blocking thread pool.
async fn run_blocking<T, F>(job: F) -> Result<T, DbError>
where
    F: FnOnce() -> Result<T, DbError> + Send + 'static,
    T: Send + 'static,
{
    web::block(job)
        .await
        .map_err(|e| DbError::Blocking(e.to_string()))?
}

/// Wraps a repository result into an `ApiResponse` with a fitting status code.
fn respond<T: Serialize>(result: Result<T, DbError>, success_status: StatusCode) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::build(success_status).json(ApiResponse::ok(data)),
        Err(e) => {
            let status = match &e {
                DbError::NotFound(_) => StatusCode::NOT_FOUND,
                DbError::Invalid(_) => StatusCode::BAD_REQUEST,
                DbError::Sqlite(_) | DbError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error!("penguin request failed: {}", e);
            HttpResponse::build(status).json(ApiResponse::<T>::failure(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PenguinRepository;
    use actix_web::{test, App};
    use common::catalog::default_penguins;
    use common::model::penguin::{Penguin, PenguinPatch};
    use tempfile::TempDir;

    fn repository() -> (TempDir, PenguinRepository) {
        let dir = TempDir::new().unwrap();
        let repo = PenguinRepository::new(dir.path().join("api.sqlite"));
        repo.init_schema().unwrap();
        (dir, repo)
    }

    #[actix_web::test]
    async fn test_list_empty_store_succeeds() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/penguins").to_request();
        let body: ApiResponse<Vec<Penguin>> = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        assert_eq!(body.data, Some(vec![]));
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(configure_routes()),
        )
        .await;

        let [emperor, ..] = default_penguins();
        let req = test::TestRequest::post()
            .uri("/api/penguins")
            .set_json(&emperor)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: ApiResponse<Penguin> = test::read_body_json(resp).await;
        let created = created.into_result().unwrap();
        assert_eq!(created.fields(), emperor);

        let req = test::TestRequest::get().uri("/api/penguins").to_request();
        let listed: ApiResponse<Vec<Penguin>> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.into_result().unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_update_toggles_favorite() {
        let (_dir, repo) = repository();
        let [_, king, _] = default_penguins();
        let created = repo.create(king).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(configure_routes()),
        )
        .await;

        let mut fields = created.fields();
        fields.is_favorite = true;
        let req = test::TestRequest::put()
            .uri(&format!("/api/penguins/{}", created.id))
            .set_json(PenguinPatch::from(fields))
            .to_request();
        let body: ApiResponse<Penguin> = test::call_and_read_body_json(&app, req).await;
        let updated = body.into_result().unwrap();
        assert_eq!(updated.id, created.id);
        assert!(updated.is_favorite);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_found() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/penguins/nope")
            .set_json(PenguinPatch::default())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ApiResponse<Penguin> = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("no penguin with id nope"));
    }

    #[actix_web::test]
    async fn test_create_with_blank_field_is_bad_request() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo.clone()))
                .service(configure_routes()),
        )
        .await;

        let [.., mut adelie] = default_penguins();
        adelie.fun_fact = String::new();
        let req = test::TestRequest::post()
            .uri("/api/penguins")
            .set_json(&adelie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(repo.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_body_gets_an_envelope() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/penguins")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"species":"Little Penguin"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse<Penguin> = test::read_body_json(resp).await;
        assert!(!body.success);
        assert!(body.error.unwrap().contains("habitat"));
        assert!(repo.list().unwrap().is_empty());

        let req = test::TestRequest::put()
            .uri("/api/penguins/whatever")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse<Penguin> = test::read_body_json(resp).await;
        assert!(!body.success);
    }

    #[actix_web::test]
    async fn test_delete_is_not_routed() {
        let (_dir, repo) = repository();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/penguins/anything")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
