//! Text analysis service using the generative model
//!
//! Builds a prompt per analysis kind, calls the model, and turns the reply
//! into a schema-complete result.

use std::sync::Arc;

use crate::model::{AnalysisKind, NormalizedResult};
use crate::service::llm::TextGenerator;

pub mod error;
pub mod normalize;
pub mod prompts;
pub mod sanitize;

pub use error::{AnalysisError, ErrorClassification};
pub use normalize::normalize;
pub use sanitize::sanitize;

use prompts::{build_prompt, system_prompt};

/// Service dispatching sentiment, summary, keyword and business-impact analyses
pub struct AnalysisService {
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisService {
    /// Creates a new analysis service on top of a shared text generator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        tracing::info!(model = %generator.model(), "Analysis service initialized");
        Self { generator }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Run one analysis.
    ///
    /// Fails only when the model call fails; a reply that is not the expected
    /// JSON still yields a complete result flagged as degraded.
    pub async fn analyze(
        &self,
        kind: AnalysisKind,
        text: &str,
    ) -> Result<NormalizedResult, AnalysisError> {
        let start_time = std::time::Instant::now();

        if text.trim().is_empty() {
            tracing::warn!(kind = %kind, "Analysis requested for empty text");
        }

        let prompt = build_prompt(kind, text);
        let prompt_length = prompt.len();

        tracing::debug!(
            kind = %kind,
            model = %self.model(),
            prompt_length = prompt_length,
            "Calling model API"
        );

        let reply = match self.generator.generate(system_prompt(kind), &prompt).await {
            Ok(reply) => {
                tracing::info!(
                    kind = %kind,
                    model = %self.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    "Model API call completed successfully"
                );
                reply
            }
            Err(e) => {
                let err = AnalysisError::from_upstream(kind, &e);
                tracing::error!(
                    kind = %kind,
                    model = %self.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    classification = ?err.classification(),
                    error = %e,
                    "Model API call failed"
                );
                return Err(err);
            }
        };

        tracing::debug!(kind = %kind, reply = %reply, "Raw model reply");

        let cleaned = sanitize(&reply);
        let result = if kind.expects_json() {
            normalize(cleaned, kind.schema())
        } else {
            NormalizedResult::summary(cleaned)
        };

        if result.is_degraded() {
            tracing::warn!(
                kind = %kind,
                reply_length = cleaned.len(),
                "Model reply could not be parsed, returning defaults"
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::LlmError;
    use crate::service::llm::stub::StubGenerator;
    use reqwest::StatusCode;
    use serde_json::json;

    fn service(reply: fn() -> Result<String, LlmError>) -> AnalysisService {
        AnalysisService::new(Arc::new(StubGenerator::replying(reply)))
    }

    #[tokio::test]
    async fn test_fenced_sentiment_reply() {
        let service = service(|| {
            Ok("```json\n{\"sentiment\": \"ポジティブ\", \"score\": 9, \"reason\": \"満足している\"}\n```".to_string())
        });

        let result = service
            .analyze(AnalysisKind::Sentiment, "最高の製品です")
            .await
            .unwrap();

        assert!(!result.is_degraded());
        assert_eq!(
            result.into_value(),
            json!({"sentiment": "ポジティブ", "score": 9, "reason": "満足している"})
        );
    }

    #[tokio::test]
    async fn test_summary_is_passed_through() {
        let service = service(|| Ok("  新製品の発表により市場が拡大。\n".to_string()));

        let result = service
            .analyze(AnalysisKind::Summary, "記事本文")
            .await
            .unwrap();

        assert_eq!(result.into_value(), json!({"summary": "新製品の発表により市場が拡大。"}));
    }

    #[tokio::test]
    async fn test_summary_that_looks_like_json_is_not_parsed() {
        let service = service(|| Ok("{\"summary\": \"x\"}".to_string()));

        let result = service.analyze(AnalysisKind::Summary, "記事").await.unwrap();

        assert_eq!(result.get("summary"), Some(&json!("{\"summary\": \"x\"}")));
    }

    #[tokio::test]
    async fn test_malformed_keywords_reply_is_not_an_error() {
        let service = service(|| Ok("キーワード: AI, 半導体".to_string()));

        let result = service
            .analyze(AnalysisKind::Keywords, "テキスト")
            .await
            .unwrap();

        assert!(result.is_degraded());
        assert_eq!(result.get("keywords"), Some(&json!([])));
        assert!(result.contains("error"));
    }

    #[tokio::test]
    async fn test_partial_business_reply_is_completed() {
        let service = service(|| Ok("{\"market_opportunity\": 9}".to_string()));

        let result = service
            .analyze(AnalysisKind::BusinessImpact, "ニュース")
            .await
            .unwrap();

        assert_eq!(
            result.into_value(),
            json!({
                "market_opportunity": 9,
                "threat_level": 5,
                "investment_priority": 5,
                "business_impact": "分析結果が不完全でした"
            })
        );
    }

    #[tokio::test]
    async fn test_quota_failure_is_classified() {
        let service = service(|| {
            Err(LlmError::Status {
                status: StatusCode::TOO_MANY_REQUESTS,
                body: "Resource has been exhausted".to_string(),
            })
        });

        let err = service
            .analyze(AnalysisKind::Sentiment, "text")
            .await
            .unwrap_err();

        assert_eq!(err.classification(), ErrorClassification::QuotaExceeded);
    }

    #[tokio::test]
    async fn test_timeout_text_only_is_unclassified() {
        let service = service(|| Err(LlmError::InvalidResponse("timeout".to_string())));

        let err = service
            .analyze(AnalysisKind::Keywords, "text")
            .await
            .unwrap_err();

        assert_eq!(err.classification(), ErrorClassification::Unclassified);
        assert!(err.to_string().starts_with("Keyword extraction failed: "));
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let service = Arc::new(service(|| {
            Ok("{\"keywords\": [\"EV\", \"電池\"]}".to_string())
        }));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .analyze(AnalysisKind::Keywords, &format!("記事 {i}"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(result.get("keywords"), Some(&json!(["EV", "電池"])));
        }
    }
}
