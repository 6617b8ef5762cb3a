//! Project cost, duration and crew estimation.
//!
//! Pipeline: validate categories against the fitted encoders, encode them,
//! run the duration and crew regressors, then price the project from the
//! tariff tables. Pure; persisting the outcome is the caller's job.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::model::{EstimationModels, FeatureVector};
use crate::tariff::{
    self, DetailLevel, Weather, DAILY_WAGE, MARGIN_PERCENT, MAX_AREA_M2, MAX_DISCOUNT,
    MAX_DISTANCE_KM, TRANSPORT_RATE_PER_KM,
};
use crate::types::Money;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Request body of `POST /estimasi`, as sent by clients.
///
/// Every field is optional at the wire level so a missing field is reported
/// by name instead of as a generic deserialization failure. `tingkat_detail`
/// is read as a number so whole-valued floats such as `4.0` are accepted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EstimateInput {
    #[validate(required, length(min = 1))]
    pub jenis_proyek: Option<String>,
    #[validate(required, range(exclusive_min = 0.0, max = MAX_AREA_M2))]
    pub luas_m2: Option<f64>,
    #[validate(required, range(min = 1.0, max = 5.0))]
    pub tingkat_detail: Option<f64>,
    #[validate(required, length(min = 1))]
    pub cuaca: Option<String>,
    #[validate(required, range(min = 0.0, max = MAX_DISTANCE_KM))]
    pub jarak_km: Option<f64>,
    #[validate(range(min = 0.0))]
    pub diskon: Option<f64>,
}

impl EstimateInput {
    /// Check presence and ranges, producing a typed request.
    pub fn into_request(self) -> Result<EstimateRequest, CoreError> {
        self.validate().map_err(describe_validation_errors)?;

        let detail_level = required(self.tingkat_detail, "tingkat_detail")?;
        if detail_level.fract() != 0.0 {
            return Err(CoreError::Validation(
                "tingkat_detail must be a whole number".into(),
            ));
        }

        Ok(EstimateRequest {
            project_type: required(self.jenis_proyek, "jenis_proyek")?,
            area_m2: required(self.luas_m2, "luas_m2")?,
            detail_level: DetailLevel::try_from(detail_level as i64)?,
            weather: required(self.cuaca, "cuaca")?,
            distance_km: required(self.jarak_km, "jarak_km")?,
            discount: self.diskon.unwrap_or(0.0),
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("missing required field: {field}")))
}

fn describe_validation_errors(errors: validator::ValidationErrors) -> CoreError {
    let mut problems: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| match &*e.code {
                "required" => format!("missing required field: {field}"),
                "length" => format!("{field} must not be empty"),
                "range" => format!("{field} is out of range"),
                other => format!("{field} is invalid ({other})"),
            })
        })
        .collect();
    problems.sort();
    CoreError::Validation(problems.join("; "))
}

/// A validated estimation request. Category labels are still unchecked
/// against the encoders; [`estimate`] does that.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub project_type: String,
    pub area_m2: f64,
    pub detail_level: DetailLevel,
    pub weather: String,
    pub distance_km: f64,
    /// Requested discount fraction; clamped to [`MAX_DISCOUNT`] when priced.
    pub discount: f64,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Cost components, reported to the client but never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub material: Money,
    #[serde(rename = "upah")]
    pub labor: Money,
    pub transport: Money,
    pub subtotal: Money,
    #[serde(rename = "faktor_detail")]
    pub detail_multiplier: f64,
    #[serde(rename = "faktor_cuaca")]
    pub weather_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    #[serde(rename = "estimasi_durasi_hari")]
    pub duration_days: i64,
    #[serde(rename = "estimasi_jumlah_pekerja")]
    pub crew_size: i64,
    #[serde(rename = "biaya_produksi")]
    pub production_cost: Money,
    #[serde(rename = "margin_persen")]
    pub margin_percent: f64,
    #[serde(rename = "nilai_margin")]
    pub margin_value: Money,
    #[serde(rename = "harga_sebelum_diskon")]
    pub sale_price: Money,
    /// Discount fraction actually applied, after clamping.
    #[serde(rename = "diskon")]
    pub discount_rate: f64,
    #[serde(rename = "diskon_persen")]
    pub discount_percent: f64,
    #[serde(rename = "nilai_diskon")]
    pub discount_value: Money,
    #[serde(rename = "harga_final")]
    pub final_price: Money,
    pub breakdown: CostBreakdown,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Estimate duration, crew and price for `request`.
pub fn estimate(
    request: &EstimateRequest,
    models: &EstimationModels,
) -> Result<EstimateResult, CoreError> {
    let project_code = models
        .project_types
        .encode(&request.project_type)
        .ok_or_else(|| CoreError::UnknownCategory {
            field: "jenis_proyek",
            value: request.project_type.clone(),
            allowed: models.project_types.known_categories().to_vec(),
        })?;
    let weather_code = models
        .weather
        .encode(&request.weather)
        .ok_or_else(|| CoreError::UnknownCategory {
            field: "cuaca",
            value: request.weather.clone(),
            allowed: models.weather.known_categories().to_vec(),
        })?;
    // EstimationModels::new guarantees every encodable weather label is priced.
    let weather = Weather::from_label(&request.weather).ok_or_else(|| {
        CoreError::UnknownCategory {
            field: "cuaca",
            value: request.weather.clone(),
            allowed: Weather::labels(),
        }
    })?;

    let features = FeatureVector::new(
        project_code,
        request.area_m2,
        request.detail_level.get(),
        weather_code,
        request.distance_km,
    );
    let duration_days = truncate(models.duration.predict(&features))?;
    let crew_size = truncate(models.crew.predict(&features))?;

    let material = request.area_m2 * tariff::material_unit_cost(&request.project_type) as f64;
    let labor = crew_size
        .checked_mul(DAILY_WAGE)
        .and_then(|wage| wage.checked_mul(duration_days))
        .ok_or_else(price_overflow)?;
    let transport = request.distance_km * TRANSPORT_RATE_PER_KM as f64;
    let subtotal = material + labor as f64 + transport;

    let detail_multiplier = request.detail_level.multiplier();
    let weather_multiplier = weather.multiplier();
    let production_cost = truncate(subtotal * detail_multiplier * weather_multiplier)?;

    let margin_value = production_cost
        .checked_mul(MARGIN_PERCENT)
        .ok_or_else(price_overflow)?
        / 100;
    let sale_price = production_cost
        .checked_add(margin_value)
        .ok_or_else(price_overflow)?;

    let discount_rate = clamp_discount(request.discount);
    let discount_value = truncate(sale_price as f64 * discount_rate)?;
    let final_price = sale_price - discount_value;

    Ok(EstimateResult {
        duration_days,
        crew_size,
        production_cost,
        margin_percent: MARGIN_PERCENT as f64,
        margin_value,
        sale_price,
        discount_rate,
        discount_percent: discount_rate * 100.0,
        discount_value,
        final_price,
        breakdown: CostBreakdown {
            material: material as Money,
            labor,
            transport: transport as Money,
            subtotal: subtotal as Money,
            detail_multiplier,
            weather_multiplier,
        },
    })
}

/// Truncate toward zero, refusing values an `i64` cannot hold.
fn truncate(value: f64) -> Result<i64, CoreError> {
    if value.is_finite() && value.abs() < Money::MAX as f64 {
        Ok(value as Money)
    } else {
        Err(price_overflow())
    }
}

fn price_overflow() -> CoreError {
    CoreError::Validation("estimate exceeds the supported price range".into())
}

/// Requested discounts above [`MAX_DISCOUNT`] are reduced to it, not rejected.
pub fn clamp_discount(requested: f64) -> f64 {
    requested.min(MAX_DISCOUNT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
