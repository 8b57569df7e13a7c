pub mod eto_pipeline;
pub mod logger;
