//! REST API endpoints for the bundled demo datasets

use actix_web::{HttpResponse, Responder, get, web};

use crate::service::DatasetService;

/// List bundled product reviews
#[utoipa::path(
    get,
    path = "/api/product-reviews",
    responses(
        (status = 200, description = "Product review collection as bundled")
    ),
    tag = "datasets"
)]
#[get("/api/product-reviews")]
pub async fn product_reviews(service: web::Data<DatasetService>) -> impl Responder {
    HttpResponse::Ok().json(service.product_reviews())
}

/// List bundled market news
#[utoipa::path(
    get,
    path = "/api/market-news",
    responses(
        (status = 200, description = "Market news collection as bundled")
    ),
    tag = "datasets"
)]
#[get("/api/market-news")]
pub async fn market_news(service: web::Data<DatasetService>) -> impl Responder {
    HttpResponse::Ok().json(service.market_news())
}

/// Configure dataset routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(product_reviews).service(market_news);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_serves_bundled_collections() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let service = DatasetService::load(&dir).unwrap();
        let expected_reviews = service.product_reviews().clone();
        let expected_news = service.market_news().clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/product-reviews").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, expected_reviews);

        let req = test::TestRequest::get().uri("/api/market-news").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, expected_news);
    }
}
