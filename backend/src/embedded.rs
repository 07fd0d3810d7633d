//! The compiled catalog page, baked into the binary by `build.rs`.

use actix_web::{HttpRequest, HttpResponse};
use common::responses::ApiResponse;
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static PAGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const ENTRY_PAGE: &str = "index.html";

/// Default service: bundled assets by path, the entry page for anything else.
///
/// Paths under `/api/` never fall through to the page; the client expects an
/// envelope there.
pub async fn serve(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return HttpResponse::NotFound().json(ApiResponse::<()>::failure(format!(
            "no route for {} /{}",
            req.method(),
            path
        )));
    }

    let asset = if path.is_empty() { ENTRY_PAGE } else { path };
    if let Some(file) = PAGE_DIR.get_file(asset) {
        let mime = from_path(asset).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    match PAGE_DIR.get_file(ENTRY_PAGE) {
        Some(page) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page.contents().to_vec()),
        None => HttpResponse::NotFound().body("frontend bundle missing, run `trunk build` first"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_unknown_api_path_gets_an_envelope() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve))).await;

        let req = test::TestRequest::get().uri("/api/walruses").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ApiResponse<()> = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("no route for GET /api/walruses"));
    }

    #[actix_web::test]
    async fn test_client_route_is_not_an_api_miss() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve))).await;

        let req = test::TestRequest::get().uri("/apiary").to_request();
        let resp = test::call_service(&app, req).await;
        let is_envelope = resp
            .headers()
            .get("content-type")
            .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
        assert!(!is_envelope);
    }
}
