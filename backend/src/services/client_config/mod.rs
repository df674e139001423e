//! `GET /forge-config.json`: hands the browser client the API base URL and
//! status polling interval this server was started with.

use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource};
use forge_common::model::config::ClientConfig;

pub const CONFIG_PATH: &str = "/forge-config.json";

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

pub async fn process(config: web::Data<ClientConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn returns_the_configured_api_url() {
        let config = ClientConfig {
            api_base_url: "https://forge.example/api".to_string(),
            status_poll_seconds: 15,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(CONFIG_PATH).to_request();
        let body: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, config);
    }
}
