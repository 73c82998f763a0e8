//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::dataset::DatasetError;
use crate::service::{AnalysisService, DatasetService, GeminiClient};

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Application state containing all services and shared resources
pub struct AppState {
    /// Model-backed analysis dispatcher
    pub analysis_service: Arc<AnalysisService>,
    /// Bundled demo datasets
    pub dataset_service: Arc<DatasetService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Bundled dataset loading
    /// 2. Gemini client initialization (requires GEMINI_API_KEY)
    /// 3. Service dependency graph construction
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let dataset_service = DatasetService::load(&config.data.dir)?;

        let api_key = std::env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingConfig(ENV_GEMINI_API_KEY))?;

        let gemini = GeminiClient::new(&api_key, &config.llm)
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            analysis_service: Arc::new(AnalysisService::new(Arc::new(gemini))),
            dataset_service: Arc::new(dataset_service),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Bundled data could not be loaded
    #[error("Dataset initialization failed: {0}")]
    DatasetInit(#[from] DatasetError),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
