//! Database queries for laporan.
//!
//! The only boundary between the application and the `laporan` table.
//! All values go through bound parameters.

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::error;

use crate::entity::laporan::{self, ActiveModel, Entity as LaporanEntity};
use crate::error::{AppError, AppResult};
use crate::models::{Laporan, NewLaporan};

use super::DbPool;

impl DbPool {
    /// Insert a new laporan and return the persisted row.
    ///
    /// `id`, `status` and `created_at` come back from `INSERT ... RETURNING`.
    pub async fn insert_laporan(&self, input: &NewLaporan) -> AppResult<Laporan> {
        input.validate()?;

        let model = ActiveModel {
            user_id: Set(Some(input.user_id)),
            pelapor: Set(input.pelapor.clone()),
            perihal: Set(input.perihal.clone()),
            tempat: Set(input.tempat.clone()),
            pelaksana: Set(input.pelaksana.clone()),
            sasaran: Set(input.sasaran.clone()),
            bentuk_kegiatan: Set(input.bentuk_kegiatan.clone()),
            tanggal: Set(input.tanggal),
            waktu: Set(input.waktu),
            ..Default::default()
        };

        let inserted = model.insert(self.connection()).await.map_err(|e| {
            error!(error = %e, "Failed to insert laporan");
            AppError::Database(format!("Failed to insert laporan: {}", e))
        })?;

        Ok(inserted.into())
    }

    /// List every laporan, newest first.
    pub async fn list_laporan(&self) -> AppResult<Vec<Laporan>> {
        let rows = LaporanEntity::find()
            .order_by_desc(laporan::Column::CreatedAt)
            .order_by_desc(laporan::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching laporan");
                AppError::Database(format!("Failed to list laporan: {}", e))
            })?;

        Ok(rows.into_iter().map(Laporan::from).collect())
    }
}
