//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::api::{analysis, dataset, error, health};
use crate::model::AnalysisRequest;

#[derive(OpenApi)]
#[openapi(
    info(title = "Insight Proxy API"),
    paths(
        dataset::product_reviews,
        dataset::market_news,
        analysis::analyze_sentiment,
        analysis::summarize_text,
        analysis::extract_keywords,
        analysis::analyze_business_impact,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        AnalysisRequest,
        error::ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::DatasetHealth,
    )),
    tags(
        (name = "datasets", description = "Bundled demo collections"),
        (name = "analysis", description = "Model-backed text analysis"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {e}")))?;
    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, body::to_bytes, http::StatusCode, test};

    #[::core::prelude::v1::test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/product-reviews",
            "/api/market-news",
            "/api/analyze-sentiment",
            "/api/summarize-text",
            "/api/extract-keywords",
            "/api/analyze-business-impact",
            "/health/live",
            "/health/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[actix_web::test]
    async fn test_yaml_endpoint_serves_document() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/openapi.yaml").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let yaml = std::str::from_utf8(&bytes).unwrap();
        assert!(yaml.contains("/api/analyze-sentiment"));
    }
}
