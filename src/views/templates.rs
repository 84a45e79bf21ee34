//! Handlebars templates for the laporan views.
//!
//! Templates are compiled into the binary and registered once. `{{value}}`
//! output is HTML-escaped by handlebars; only already-rendered fragments use
//! the triple-stash form.

use std::sync::LazyLock;

use handlebars::Handlebars;
use serde::Serialize;

pub const TABLE: &str = "laporan_table";
pub const DETAIL_MODAL: &str = "detail_modal";
pub const PAGE: &str = "laporan_page";

const SOURCES: [(&str, &str); 3] = [
    (TABLE, include_str!("../../templates/laporan_table.html.hbs")),
    (
        DETAIL_MODAL,
        include_str!("../../templates/detail_modal.html.hbs"),
    ),
    (PAGE, include_str!("../../templates/laporan_page.html.hbs")),
];

static REGISTRY: LazyLock<Result<Handlebars<'static>, String>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    for (name, source) in SOURCES {
        registry
            .register_template_string(name, source)
            .map_err(|e| format!("template {name}: {e}"))?;
    }
    Ok(registry)
});

/// View rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Template registration failed: {0}")]
    Template(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Render template `name` with `context`.
pub fn render<T: Serialize>(name: &str, context: &T) -> Result<String, ViewError> {
    let registry = REGISTRY
        .as_ref()
        .map_err(|e| ViewError::Template(e.clone()))?;
    Ok(registry.render(name, context)?)
}
