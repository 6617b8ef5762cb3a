//! Repository for the `estimate_history` table.
//!
//! Append-only: rows are inserted once per successful estimate and read back
//! for listings and aggregate reports. Nothing here updates or deletes.

use sqlx::SqlitePool;

use crate::models::analytics::{EstimateSummary, MonthlyCount, ProjectTypeCount};
use crate::models::history::{HistoryRecord, NewHistoryRecord};

/// Column list for `estimate_history` SELECT queries.
const COLUMNS: &str = "\
    id, created_at, project_type, area_m2, detail_level, weather, distance_km, \
    duration_days, crew_size, production_cost, margin_value, sale_price, \
    discount_rate, discount_value, final_price";

/// Provides query operations for estimate history.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Store one estimate. The id and timestamp come back from the same
    /// statement, so concurrent writers never observe each other's identity.
    pub async fn append(
        pool: &SqlitePool,
        input: &NewHistoryRecord,
    ) -> Result<HistoryRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO estimate_history \
                (project_type, area_m2, detail_level, weather, distance_km, \
                 duration_days, crew_size, production_cost, margin_value, sale_price, \
                 discount_rate, discount_value, final_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryRecord>(&query)
            .bind(&input.project_type)
            .bind(input.area_m2)
            .bind(input.detail_level)
            .bind(&input.weather)
            .bind(input.distance_km)
            .bind(input.duration_days)
            .bind(input.crew_size)
            .bind(input.production_cost)
            .bind(input.margin_value)
            .bind(input.sale_price)
            .bind(input.discount_rate)
            .bind(input.discount_value)
            .bind(input.final_price)
            .fetch_one(pool)
            .await
    }

    /// Every record, most recent first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<HistoryRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estimate_history ORDER BY id DESC");
        sqlx::query_as::<_, HistoryRecord>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM estimate_history")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Count, sum, average, min and max of the final price.
    pub async fn summary(pool: &SqlitePool) -> Result<EstimateSummary, sqlx::Error> {
        sqlx::query_as::<_, EstimateSummary>(
            "SELECT \
                COUNT(*) AS total_estimates, \
                COALESCE(SUM(final_price), 0) AS total_final_price, \
                AVG(final_price) AS average_final_price, \
                MIN(final_price) AS min_final_price, \
                MAX(final_price) AS max_final_price \
             FROM estimate_history",
        )
        .fetch_one(pool)
        .await
    }

    /// Record counts per project type, most common first.
    pub async fn count_by_project_type(
        pool: &SqlitePool,
    ) -> Result<Vec<ProjectTypeCount>, sqlx::Error> {
        sqlx::query_as::<_, ProjectTypeCount>(
            "SELECT project_type, COUNT(*) AS count \
             FROM estimate_history \
             GROUP BY project_type \
             ORDER BY count DESC, project_type",
        )
        .fetch_all(pool)
        .await
    }

    /// Record counts per `YYYY-MM` month, oldest first.
    pub async fn count_by_month(pool: &SqlitePool) -> Result<Vec<MonthlyCount>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyCount>(
            "SELECT substr(created_at, 1, 7) AS month, COUNT(*) AS count \
             FROM estimate_history \
             GROUP BY month \
             ORDER BY month",
        )
        .fetch_all(pool)
        .await
    }
}
