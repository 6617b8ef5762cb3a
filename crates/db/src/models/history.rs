//! Estimate history entity and insert DTO.

use sanggar_core::estimation::{EstimateRequest, EstimateResult};
use sanggar_core::types::{DbId, Money};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One completed estimate. Never updated after insert.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct HistoryRecord {
    pub id: DbId,
    /// Local time of insert, `YYYY-MM-DD HH:MM`, assigned by the database.
    #[serde(rename = "tanggal")]
    pub created_at: String,

    #[serde(rename = "jenis_proyek")]
    pub project_type: String,
    #[serde(rename = "luas_m2")]
    pub area_m2: f64,
    #[serde(rename = "tingkat_detail")]
    pub detail_level: i64,
    #[serde(rename = "cuaca")]
    pub weather: String,
    #[serde(rename = "jarak_km")]
    pub distance_km: f64,

    #[serde(rename = "durasi_hari")]
    pub duration_days: i64,
    #[serde(rename = "jumlah_pekerja")]
    pub crew_size: i64,

    #[serde(rename = "biaya_produksi")]
    pub production_cost: Money,
    #[serde(rename = "nilai_margin")]
    pub margin_value: Money,
    #[serde(rename = "harga_sebelum_diskon")]
    pub sale_price: Money,
    #[serde(rename = "diskon")]
    pub discount_rate: f64,
    #[serde(rename = "nilai_diskon")]
    pub discount_value: Money,
    #[serde(rename = "harga_final")]
    pub final_price: Money,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Insert DTO. Identity and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryRecord {
    pub project_type: String,
    pub area_m2: f64,
    pub detail_level: i64,
    pub weather: String,
    pub distance_km: f64,
    pub duration_days: i64,
    pub crew_size: i64,
    pub production_cost: Money,
    pub margin_value: Money,
    pub sale_price: Money,
    pub discount_rate: f64,
    pub discount_value: Money,
    pub final_price: Money,
}

impl NewHistoryRecord {
    /// Capture a request and its result. The breakdown is not kept, and the
    /// discount stored is the one actually applied.
    pub fn from_estimate(request: &EstimateRequest, result: &EstimateResult) -> Self {
        Self {
            project_type: request.project_type.clone(),
            area_m2: request.area_m2,
            detail_level: i64::from(request.detail_level.get()),
            weather: request.weather.clone(),
            distance_km: request.distance_km,
            duration_days: result.duration_days,
            crew_size: result.crew_size,
            production_cost: result.production_cost,
            margin_value: result.margin_value,
            sale_price: result.sale_price,
            discount_rate: result.discount_rate,
            discount_value: result.discount_value,
            final_price: result.final_price,
        }
    }
}
