//! Template-based dashboard renderer.

use super::model::PageModel;
use crate::shell::domain::ShellSnapshot;
use minijinja::Environment;
use thiserror::Error;

const TEMPLATES: [(&str, &str); 5] = [
    ("page", include_str!("../templates/page.txt.j2")),
    ("header", include_str!("../templates/header.txt.j2")),
    ("selector", include_str!("../templates/selector.txt.j2")),
    ("contributors", include_str!("../templates/contributors.txt.j2")),
    ("board", include_str!("../templates/board.txt.j2")),
];

/// Errors returned while preparing or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("failed to render template `{template}`: {source}")]
    Template {
        /// Name of the template.
        template: &'static str,
        /// Underlying template error.
        #[source]
        source: minijinja::Error,
    },
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders shell snapshots to plain text.
#[derive(Debug)]
pub struct DashboardRenderer {
    environment: Environment<'static>,
}

impl DashboardRenderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a template fails to compile.
    pub fn new() -> RenderResult<Self> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|err| RenderError::Template {
                    template: name,
                    source: err,
                })?;
        }
        Ok(Self { environment })
    }

    /// Renders the header, selector and, when a repository is selected,
    /// both dashboard panels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render(&self, snapshot: &ShellSnapshot) -> RenderResult<String> {
        let page = PageModel::from_snapshot(snapshot);
        self.environment
            .get_template("page")
            .and_then(|template| template.render(&page))
            .map_err(|err| RenderError::Template {
                template: "page",
                source: err,
            })
    }
}
