pub mod analysis;
pub mod dataset;
pub mod llm;

pub use analysis::AnalysisService;
pub use dataset::DatasetService;
pub use llm::GeminiClient;
