pub mod config;
pub mod report;

pub use config::{AppConfig, PipelineConfig, UploadConfig};
pub use report::GradeReport;
