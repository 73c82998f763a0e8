//! Error types for model-backed analysis

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::AnalysisKind;
use crate::service::llm::LlmError;

/// Upstream failure texts that mean the caller hit a rate or usage limit
static QUOTA_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)429|quota|rate[ _-]?limit|resource[ _]exhausted|too many requests")
        .expect("quota marker pattern is valid")
});

/// Coarse class of an upstream invocation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    QuotaExceeded,
    TransientUpstream,
    Unclassified,
}

impl ErrorClassification {
    /// Classify from the error's textual description alone
    pub fn from_message(message: &str) -> Self {
        if QUOTA_MARKERS.is_match(message) {
            ErrorClassification::QuotaExceeded
        } else {
            ErrorClassification::Unclassified
        }
    }

    /// Classify an upstream client error. Quota markers win over transport
    /// signals; timeouts are transient.
    pub fn from_llm_error(err: &LlmError) -> Self {
        match Self::from_message(&err.to_string()) {
            ErrorClassification::QuotaExceeded => ErrorClassification::QuotaExceeded,
            _ if matches!(err, LlmError::Timeout(_)) => ErrorClassification::TransientUpstream,
            other => other,
        }
    }
}

/// Error type for model-backed analysis.
///
/// Only raised when the model call itself fails; malformed replies are
/// absorbed by normalization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("{} failed: API quota exceeded: {detail}", .kind.label())]
    QuotaExceeded { kind: AnalysisKind, detail: String },

    #[error("{} failed: {detail}", .kind.label())]
    TransientUpstream { kind: AnalysisKind, detail: String },

    #[error("{} failed: {detail}", .kind.label())]
    Unclassified { kind: AnalysisKind, detail: String },
}

impl AnalysisError {
    pub fn from_upstream(kind: AnalysisKind, err: &LlmError) -> Self {
        let detail = err.to_string();
        match ErrorClassification::from_llm_error(err) {
            ErrorClassification::QuotaExceeded => AnalysisError::QuotaExceeded { kind, detail },
            ErrorClassification::TransientUpstream => {
                AnalysisError::TransientUpstream { kind, detail }
            }
            ErrorClassification::Unclassified => AnalysisError::Unclassified { kind, detail },
        }
    }

    pub fn classification(&self) -> ErrorClassification {
        match self {
            AnalysisError::QuotaExceeded { .. } => ErrorClassification::QuotaExceeded,
            AnalysisError::TransientUpstream { .. } => ErrorClassification::TransientUpstream,
            AnalysisError::Unclassified { .. } => ErrorClassification::Unclassified,
        }
    }
}
