pub mod grade;
pub mod upload;

use utoipa::OpenApi;

pub use grade::{__path_handle_grade, handle_grade};
pub use upload::{handle_index, handle_upload};

use crate::models::GradeReport;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Matcha Grader API",
        description = "Quality grading of matcha samples from photos",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(grade::handle_grade),
    components(schemas(GradeReport)),
    tags(
        (name = "Grading", description = "Sample grading")
    )
)]
pub struct ApiDoc;
