pub mod display_pipeline;
pub mod logger;
