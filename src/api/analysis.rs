//! REST API endpoints for model-backed text analysis

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::model::{AnalysisKind, AnalysisRequest};
use crate::service::AnalysisService;

async fn run(
    service: &AnalysisService,
    kind: AnalysisKind,
    request: AnalysisRequest,
) -> Result<HttpResponse, ApiError> {
    let result = service.analyze(kind, &request.text).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Classify the sentiment of a product review
///
/// Returns `{sentiment, score, reason}`. Unparsable model output yields
/// defaults with a diagnostic in `reason`.
#[utoipa::path(
    post,
    path = "/api/analyze-sentiment",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Sentiment, score (0-10) and reason"),
        (status = 429, description = "Model API quota exceeded", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Model API call failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/api/analyze-sentiment")]
pub async fn analyze_sentiment(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&service, AnalysisKind::Sentiment, body.into_inner()).await
}

/// Summarize a news article
#[utoipa::path(
    post,
    path = "/api/summarize-text",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Summary text as returned by the model"),
        (status = 429, description = "Model API quota exceeded", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Model API call failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/api/summarize-text")]
pub async fn summarize_text(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&service, AnalysisKind::Summary, body.into_inner()).await
}

/// Extract up to five keywords
#[utoipa::path(
    post,
    path = "/api/extract-keywords",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Keyword list, with an error note when the model output was unparsable"),
        (status = 429, description = "Model API quota exceeded", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Model API call failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/api/extract-keywords")]
pub async fn extract_keywords(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&service, AnalysisKind::Keywords, body.into_inner()).await
}

/// Score market opportunity, threat level and investment priority of a news item
#[utoipa::path(
    post,
    path = "/api/analyze-business-impact",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Scores (1-10) and a short business impact rationale"),
        (status = 429, description = "Model API quota exceeded", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Model API call failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/api/analyze-business-impact")]
pub async fn analyze_business_impact(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    run(&service, AnalysisKind::BusinessImpact, body.into_inner()).await
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(analyze_sentiment)
    .service(summarize_text)
    .service(extract_keywords)
    .service(analyze_business_impact);
}
