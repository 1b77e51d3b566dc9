use actix_web::{test, web, App};
use serde_json::{json, Value};

use conflink::config::Config;
use conflink::services::{HealthService, ShortenService};

fn test_config(default_base_url: Option<&str>) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        default_base_url: default_base_url.map(str::to_string),
        log_level: "info".to_string(),
        log_file: None,
    }
}

macro_rules! test_app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($config))
                .route("/api/shorten", web::post().to(ShortenService::post_shorten))
                .route(
                    "/api/decode/{token}",
                    web::get().to(ShortenService::get_decode),
                )
                .route("/health", web::get().to(HealthService::health_check)),
        )
        .await
    };
}

#[cfg(test)]
mod shorten_endpoint_tests {
    use super::*;

    #[actix_web::test]
    async fn test_shorten_derived_base() {
        let app = test_app!(test_config(None));

        let req = test::TestRequest::post()
            .uri("/api/shorten")
            .set_json(json!({ "full_url": "https://conf.example.com/pages/123456/My+Page" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["short_url"], "https://conf.example.com/x/QOIBAA");
        assert_eq!(body["page_id"], 123456);
        assert_eq!(body["token"], "QOIBAA");
    }

    #[actix_web::test]
    async fn test_shorten_request_base_overrides_config() {
        let app = test_app!(test_config(Some("https://configured.example.com")));

        let req = test::TestRequest::post()
            .uri("/api/shorten")
            .set_json(json!({
                "full_url": "https://conf.example.com/pages/987",
                "base_url": "https://requested.example.com",
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["short_url"], "https://requested.example.com/x/2wMAAA");
    }

    #[actix_web::test]
    async fn test_shorten_falls_back_to_configured_base() {
        let app = test_app!(test_config(Some("https://configured.example.com")));

        let req = test::TestRequest::post()
            .uri("/api/shorten")
            .set_json(json!({ "full_url": "https://conf.example.com/pages/987" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["short_url"], "https://configured.example.com/x/2wMAAA");
    }

    #[actix_web::test]
    async fn test_shorten_unresolvable_url_is_400() {
        let app = test_app!(test_config(None));

        let req = test::TestRequest::post()
            .uri("/api/shorten")
            .set_json(json!({ "full_url": "https://conf.example.com/display/SPACE/Title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "E001");
        assert_eq!(body["error"], "Page ID Not Found");
    }
}

#[cfg(test)]
mod decode_endpoint_tests {
    use super::*;

    #[actix_web::test]
    async fn test_decode_round_trip() {
        let app = test_app!(test_config(None));

        let req = test::TestRequest::get()
            .uri("/api/decode/QOIBAA")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["page_id"], 123456);
    }

    #[actix_web::test]
    async fn test_decode_invalid_token_is_400() {
        let app = test_app!(test_config(None));

        let req = test::TestRequest::get()
            .uri("/api/decode/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "E004");
    }
}

#[cfg(test)]
mod health_endpoint_tests {
    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!(test_config(None));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
