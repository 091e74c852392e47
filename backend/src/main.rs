mod config;
mod services;

use crate::config::HostConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static FRONTEND: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");
const INDEX: &str = "index.html";

/// Serves the embedded frontend build. Paths that match no file get
/// `index.html` so client-side routes still load the app; unknown `api/`
/// paths stay 404.
async fn serve_frontend(req: HttpRequest) -> HttpResponse {
    let requested = match req.path().trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };
    if requested.starts_with("api/") {
        return HttpResponse::NotFound().body("Unknown API route");
    }

    let (path, file) = match FRONTEND.get_file(requested) {
        Some(file) => (requested, file),
        None => match FRONTEND.get_file(INDEX) {
            Some(index) => (INDEX, index),
            None => return HttpResponse::NotFound().body("Frontend not built"),
        },
    };
    HttpResponse::Ok()
        .content_type(from_path(path).first_or_octet_stream())
        .body(file.contents())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if FRONTEND.get_file(INDEX).is_none() {
        warn!("No embedded frontend found; build it with `trunk build` in ../frontend");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);
    info!("Explorer will query {}", config.query_service_url);

    let explorer_config = web::Data::new(config.explorer_config());
    HttpServer::new(move || {
        App::new()
            .app_data(explorer_config.clone())
            .service(services::explorer_config::configure_routes())
            .default_service(web::route().to(serve_frontend))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn unknown_api_routes_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(common::model::config::ExplorerConfig::default()))
                .service(services::explorer_config::configure_routes())
                .default_service(web::route().to(serve_frontend)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tables").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn other_paths_fall_back_to_the_app_shell() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_frontend))).await;

        let req = test::TestRequest::get().uri("/explore/orders").to_request();
        let resp = test::call_service(&app, req).await;
        match FRONTEND.get_file(INDEX) {
            Some(_) => assert_eq!(resp.status(), StatusCode::OK),
            None => assert_eq!(resp.status(), StatusCode::NOT_FOUND),
        }
    }
}
