//! Report table view.
//!
//! Server-side rendition of the laporan table: state lives in
//! [`LaporanTable`], rows arrive through a [`ReportSource`] and everything
//! renders to HTML through the handlebars templates in
//! [`templates`].

pub mod chip;
pub mod detail_modal;
pub mod laporan_table;
pub mod source;
pub mod templates;

use serde::Serialize;

pub use chip::{ChipColor, STATUS_COLORS, status_color};
pub use detail_modal::DetailModal;
pub use laporan_table::{Action, Column, DetailOverlay, LaporanTable, UiEvent};
pub use source::{FetchError, HttpReportSource, ReportSource, StoreReportSource};
pub use templates::ViewError;

#[derive(Serialize)]
struct PageContext {
    table: String,
}

/// Wrap a rendered table in a standalone HTML document.
pub fn render_document(table: &LaporanTable) -> Result<String, ViewError> {
    let context = PageContext {
        table: table.render()?,
    };
    templates::render(templates::PAGE, &context)
}
