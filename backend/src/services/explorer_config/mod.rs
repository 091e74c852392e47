//! Serves the runtime configuration of the explorer frontend.
//!
//! The provided route is:
//! - `GET /api/config`: returns the `ExplorerConfig` (currently just the Query
//!   Service base URL) that the host was started with. The frontend requests
//!   it on first render before loading the table and collection lists.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use common::model::config::ExplorerConfig;

const API_PATH: &str = "/api/config";

/// Configures and returns the Actix scope for the configuration route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(config: web::Data<ExplorerConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn returns_the_configured_query_service() {
        let config = ExplorerConfig {
            query_service_url: "http://query.internal:5001".into(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: ExplorerConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ExplorerConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
