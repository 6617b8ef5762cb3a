//! Aggregate views over the estimate history.

use sanggar_core::types::Money;
use serde::Serialize;
use sqlx::FromRow;

/// Totals across every stored estimate. Min/max/avg are `None` when empty.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EstimateSummary {
    #[serde(rename = "total_estimasi")]
    pub total_estimates: i64,
    #[serde(rename = "total_harga_final")]
    pub total_final_price: Money,
    #[serde(rename = "rata_rata_harga_final")]
    pub average_final_price: Option<f64>,
    #[serde(rename = "harga_final_min")]
    pub min_final_price: Option<Money>,
    #[serde(rename = "harga_final_max")]
    pub max_final_price: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProjectTypeCount {
    #[serde(rename = "jenis_proyek")]
    pub project_type: String,
    #[serde(rename = "jumlah")]
    pub count: i64,
}

/// Estimates per calendar month, keyed by the `YYYY-MM` prefix of the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MonthlyCount {
    #[serde(rename = "bulan")]
    pub month: String,
    #[serde(rename = "jumlah")]
    pub count: i64,
}
