pub mod analysis;
pub mod config;

pub use analysis::{AnalysisKind, AnalysisRequest, NormalizedResult, ResultSchema};
pub use config::{Config, CorsConfig, LlmConfig};
