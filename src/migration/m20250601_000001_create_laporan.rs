//! Migration: Create laporan table.
//!
//! `id`, `status` and `created_at` are filled in by the database.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE laporan (
                    id SERIAL PRIMARY KEY,
                    -- Submitting user; users live outside this service
                    user_id INTEGER,
                    pelapor TEXT NOT NULL,
                    perihal TEXT NOT NULL,
                    tempat TEXT NOT NULL,
                    pelaksana TEXT NOT NULL,
                    sasaran TEXT NOT NULL,
                    bentuk_kegiatan TEXT NOT NULL,
                    tanggal DATE NOT NULL,
                    waktu TIME NOT NULL,
                    status VARCHAR(32) NOT NULL DEFAULT 'aktif',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Listing is always newest first
                CREATE INDEX idx_laporan_created_at ON laporan(created_at DESC, id DESC);

                CREATE INDEX idx_laporan_user_id ON laporan(user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS laporan;")
            .await?;

        Ok(())
    }
}
