use std::path::PathBuf;

use chrono::Local;
use tera::{Context, Tera};

use crate::error::NotifyError;
use crate::models::NotificationPayload;
use crate::notify::Renderer;

const TEMPLATE_NAME: &str = "email.html";

// Tera matches these against the file path for file templates and against the
// name for inline ones.
const AUTOESCAPE_SUFFIXES: [&str; 3] = [".tmpl", ".html", ".htm"];

enum TemplateSource {
    File(PathBuf),
    Inline(String),
}

/// Renders the alert through a Tera template.
///
/// A file template is read on every render rather than at construction, so a
/// run that finds nothing never touches it.
pub struct TeraRenderer {
    source: TemplateSource,
}

impl TeraRenderer {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::File(path.into()),
        }
    }

    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            source: TemplateSource::Inline(template.into()),
        }
    }

    fn load(&self) -> Result<Tera, NotifyError> {
        let mut tera = Tera::default();
        tera.autoescape_on(AUTOESCAPE_SUFFIXES.to_vec());
        match &self.source {
            TemplateSource::File(path) => tera
                .add_template_file(path, Some(TEMPLATE_NAME))
                .map_err(|source| NotifyError::Template {
                    path: path.clone(),
                    source,
                })?,
            TemplateSource::Inline(raw) => tera
                .add_raw_template(TEMPLATE_NAME, raw)
                .map_err(|source| NotifyError::Template {
                    path: PathBuf::from("<inline>"),
                    source,
                })?,
        }
        Ok(tera)
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, payload: &NotificationPayload) -> Result<String, NotifyError> {
        let tera = self.load()?;

        let mut context = Context::new();
        context.insert("results", payload.results());
        context.insert("qualifying_count", &payload.qualifying_count());
        context.insert(
            "generated_at",
            &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        );

        tera.render(TEMPLATE_NAME, &context)
            .map_err(NotifyError::Render)
    }
}
