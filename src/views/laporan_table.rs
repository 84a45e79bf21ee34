//! Laporan table: row state, detail overlay state machine and rendering.

use serde::Serialize;
use tracing::{debug, error};

use super::chip::status_color;
use super::detail_modal::DetailModal;
use super::source::ReportSource;
use super::templates::{self, ViewError};
use crate::models::Laporan;

/// Placeholder shown when there are no rows.
pub const EMPTY_CONTENT: &str = "Tidak ada data ditampilkan";

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Perihal,
    Pelapor,
    Status,
    Actions,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Perihal,
        Column::Pelapor,
        Column::Status,
        Column::Actions,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Perihal => "perihal",
            Self::Pelapor => "pelapor",
            Self::Status => "status",
            Self::Actions => "actions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Perihal => "Perihal",
            Self::Pelapor => "Pelapor",
            Self::Status => "Status",
            Self::Actions => "Tindakan",
        }
    }

    pub fn align(&self) -> &'static str {
        match self {
            Self::Actions => "center",
            _ => "start",
        }
    }

    /// Cell content of this column for one row.
    fn render_cell<'a>(&self, row: usize, laporan: &'a Laporan) -> Cell<'a> {
        match self {
            Self::Perihal => Cell::Text {
                value: &laporan.perihal,
            },
            Self::Pelapor => Cell::Text {
                value: &laporan.pelapor,
            },
            Self::Status => Cell::Status {
                value: &laporan.status,
                color: status_color(&laporan.status).as_str(),
            },
            Self::Actions => Cell::Actions { row },
        }
    }
}

/// One table cell as handed to the template; `kind` selects the markup.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Cell<'a> {
    Text { value: &'a str },
    Status { value: &'a str, color: &'static str },
    Actions { row: usize },
}

#[derive(Serialize)]
struct HeaderContext {
    key: &'static str,
    label: &'static str,
    align: &'static str,
}

#[derive(Serialize)]
struct RowContext<'a> {
    key: i32,
    cells: Vec<Cell<'a>>,
}

#[derive(Serialize)]
struct TableContext<'a> {
    columns: Vec<HeaderContext>,
    rows: Vec<RowContext<'a>>,
    column_count: usize,
    empty_content: &'static str,
    modal: String,
}

/// Row-level affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Opens the detail overlay
    Detail,
    /// Edit; not wired to anything
    Ubah,
    /// Delete; not wired to anything
    Hapus,
}

/// User interaction delivered to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer activation of an action on row `row`.
    Click { row: usize, action: Action },
    /// Key pressed while an action on row `row` has focus.
    KeyDown {
        row: usize,
        action: Action,
        key: String,
    },
    /// The overlay's close control fired.
    CloseDetail,
}

/// Detail overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(Laporan),
}

impl DetailOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&Laporan> {
        match self {
            Self::Open(laporan) => Some(laporan),
            Self::Closed => None,
        }
    }
}

/// Keys that activate a focused button.
fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// The laporan table and its local state.
#[derive(Debug, Default)]
pub struct LaporanTable {
    rows: Vec<Laporan>,
    detail: DetailOverlay,
}

impl LaporanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-populated with rows.
    pub fn with_rows(rows: Vec<Laporan>) -> Self {
        Self {
            rows,
            detail: DetailOverlay::Closed,
        }
    }

    pub fn rows(&self) -> &[Laporan] {
        &self.rows
    }

    pub fn detail(&self) -> &DetailOverlay {
        &self.detail
    }

    /// Load rows once from `source`.
    ///
    /// On failure the error is logged and the current rows are kept.
    pub async fn mount(&mut self, source: &dyn ReportSource) {
        match source.fetch_all().await {
            Ok(rows) => {
                debug!(count = rows.len(), "Loaded laporan");
                self.rows = rows;
            }
            Err(e) => {
                error!(error = %e, "Error fetching laporan");
            }
        }
    }

    /// Apply a user interaction.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Click {
                row,
                action: Action::Detail,
            } => self.open_detail(row),
            UiEvent::KeyDown {
                row,
                action: Action::Detail,
                key,
            } if is_activation_key(&key) => self.open_detail(row),
            UiEvent::CloseDetail => self.detail = DetailOverlay::Closed,
            _ => {}
        }
    }

    /// Open the overlay for the row holding laporan `id`. Returns false if no row matches.
    pub fn open_detail_by_id(&mut self, id: i32) -> bool {
        match self.rows.iter().position(|laporan| laporan.id == id) {
            Some(row) => {
                self.handle(UiEvent::Click {
                    row,
                    action: Action::Detail,
                });
                true
            }
            None => false,
        }
    }

    fn open_detail(&mut self, row: usize) {
        if let Some(laporan) = self.rows.get(row) {
            self.detail = DetailOverlay::Open(laporan.clone());
        }
    }

    /// Render the table followed by the detail overlay.
    pub fn render(&self) -> Result<String, ViewError> {
        let columns = Column::ALL
            .iter()
            .map(|column| HeaderContext {
                key: column.key(),
                label: column.label(),
                align: column.align(),
            })
            .collect();

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, laporan)| RowContext {
                key: laporan.id,
                cells: Column::ALL
                    .iter()
                    .map(|column| column.render_cell(index, laporan))
                    .collect(),
            })
            .collect();

        let context = TableContext {
            columns,
            rows,
            column_count: Column::ALL.len(),
            empty_content: EMPTY_CONTENT,
            modal: DetailModal::new(self.detail.selected(), self.detail.is_open()).render()?,
        };

        templates::render(templates::TABLE, &context)
    }
}
