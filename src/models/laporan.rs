//! Laporan domain models and DTOs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::laporan;
use crate::error::{AppError, AppResult};

/// A persisted activity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Laporan {
    pub id: i32,
    /// Submitting user, if known.
    pub user_id: Option<i32>,
    /// Name of the reporting person.
    pub pelapor: String,
    /// Subject of the report.
    pub perihal: String,
    pub tempat: String,
    pub pelaksana: String,
    pub sasaran: String,
    pub bentuk_kegiatan: String,
    #[schema(value_type = String, format = Date, example = "2025-06-01")]
    pub tanggal: NaiveDate,
    #[schema(value_type = String, example = "09:30:00")]
    pub waktu: NaiveTime,
    /// Lifecycle tag: `selesai`, `aktif`, `vacation` or any other value.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<laporan::Model> for Laporan {
    fn from(m: laporan::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            pelapor: m.pelapor,
            perihal: m.perihal,
            tempat: m.tempat,
            pelaksana: m.pelaksana,
            sasaran: m.sasaran,
            bentuk_kegiatan: m.bentuk_kegiatan,
            tanggal: m.tanggal,
            waktu: m.waktu,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

/// Request body for submitting a new report.
///
/// Every field is required; nothing is defaulted here.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewLaporan {
    pub user_id: i32,
    pub pelapor: String,
    pub perihal: String,
    pub tempat: String,
    pub pelaksana: String,
    pub sasaran: String,
    pub bentuk_kegiatan: String,
    #[schema(value_type = String, format = Date, example = "2025-06-01")]
    pub tanggal: NaiveDate,
    #[schema(value_type = String, example = "09:30:00")]
    pub waktu: NaiveTime,
}

impl NewLaporan {
    /// Reject blank text fields.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("pelapor", &self.pelapor),
            ("perihal", &self.perihal),
            ("tempat", &self.tempat),
            ("pelaksana", &self.pelaksana),
            ("sasaran", &self.sasaran),
            ("bentuk_kegiatan", &self.bentuk_kegiatan),
        ];

        let blank: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!(
                "fields must not be empty: {}",
                blank.join(", ")
            )))
        }
    }
}
