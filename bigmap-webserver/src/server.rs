//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::runtime_config::{config_from_args, service_from_args};
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use bigmap_core::service::{parse_query, BigmapService, MapRequest};
use clap::ArgMatches;
use std::str::FromStr;

/// Application state
pub struct AppState {
    pub service: BigmapService,
    /// Cache-Control max-age in seconds
    pub cache_max_age: u32,
}

impl AppState {
    fn map_request(&self, req: &HttpRequest) -> MapRequest {
        self.service.map_request(&parse_query(req.query_string()))
    }
    fn cache_control(&self) -> CacheControl {
        CacheControl(vec![CacheDirective::MaxAge(self.cache_max_age)])
    }
}

async fn map_page(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let request = state.map_request(&req);
    match state.service.page_html(&request) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header(state.cache_control())
            .body(html),
        Err(e) => {
            error!("{}", e);
            HttpResponse::InternalServerError().body(e)
        }
    }
}

async fn map_metadata(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let request = state.map_request(&req);
    match state.service.get_metadata(&request) {
        Ok(json) => HttpResponse::Ok()
            .insert_header(state.cache_control())
            .json(json),
        Err(e) => {
            error!("{}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(map_page))
        .route("/bigmap.json", web::get().to(map_metadata));
}

pub fn webserver(args: ArgMatches<'static>) -> std::io::Result<()> {
    let config = config_from_args(&args);
    let host = config
        .webserver
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config.webserver.port.unwrap_or(8080);
    let bind_addr = format!("{}:{}", host, port);
    let openbrowser =
        bool::from_str(args.value_of("openbrowser").unwrap_or("false")).unwrap_or(false);
    let threads = config
        .webserver
        .threads
        .map(|threads| threads as usize)
        .unwrap_or_else(num_cpus::get);
    let state = web::Data::new(AppState {
        service: service_from_args(&config, &args),
        cache_max_age: config.webserver.cache_control_max_age.unwrap_or(300),
    });

    actix_web::rt::System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(middleware::Logger::default())
                .configure(routes)
        })
        .workers(threads)
        .bind(&bind_addr)?
        .shutdown_timeout(3) // default: 30s
        .run();

        info!("Serving maps on http://{}/", bind_addr);
        if openbrowser {
            let _res = open::that(format!("http://{}:{}/", &host, port));
        }
        server.await
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            service: BigmapService::default(),
            cache_max_age: 600,
        })
    }

    #[actix_web::test]
    async fn test_map_page() {
        let app =
            test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/?tileurl=http%3A%2F%2Ftile.openstreetmap.org%2F17%2F39137%2F48460.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "max-age=600"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<title>bigmap 17/39136-39138/48459-48461</title>"));
        assert_eq!(html.matches("<img ").count(), 9);
    }

    #[actix_web::test]
    async fn test_map_page_defaults() {
        let app =
            test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/?zoom=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"src="http://tile.openstreetmap.org/0/0/0.png""#));
    }

    #[actix_web::test]
    async fn test_map_metadata() {
        let app =
            test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/bigmap.json?xmin=10&xmax=12&ymin=5&ymax=6&zoom=5&baseurl=%2F!z%2F!x%2F!y.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "max-age=600"
        );
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["baseurl"], "/!z/!x/!y.png");
        assert_eq!(json["tiles"]["count"], 6);
        assert_eq!(json["links"].as_array().unwrap().len(), 40);
    }

    #[actix_web::test]
    async fn test_not_found() {
        let app =
            test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::get().uri("/tiles/0/0/0.png").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
