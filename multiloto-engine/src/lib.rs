pub mod analyzer;
pub mod engine;
pub mod strategies;

pub use analyzer::DataAnalyzer;
pub use engine::{EngineConfig, PredictionEngine};
