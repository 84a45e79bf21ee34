//! Laporan entity for activity reports.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "laporan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub pelapor: String,
    pub perihal: String,
    pub tempat: String,
    pub pelaksana: String,
    pub sasaran: String,
    pub bentuk_kegiatan: String,
    pub tanggal: Date,
    pub waktu: Time,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
