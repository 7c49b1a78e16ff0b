use tera::{Context, Tera};

use crate::error::ApiError;

const INDEX_TEMPLATE: &str = "index.html";

/// What the upload page shows below the form
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageView {
    pub error: Option<String>,
    pub grade: Option<String>,
    pub tip: Option<String>,
}

/// Renders the HTML upload page with Tera
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a renderer with the embedded upload page template
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        tracing::debug!("Page templates loaded");
        Ok(Self { tera })
    }

    /// Render the upload page
    pub fn render(&self, view: &PageView) -> Result<String, ApiError> {
        let mut context = Context::new();
        context.insert("error", &view.error);
        context.insert("grade", &view.grade);
        context.insert("tip", &view.tip);
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}
