pub mod grading;
pub mod page;

pub use grading::GradingService;
pub use page::{PageRenderer, PageView};
