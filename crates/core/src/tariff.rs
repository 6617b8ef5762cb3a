//! Tariff tables used by the pricing pipeline.
//!
//! The sets of project types, weather conditions and detail levels are
//! closed, so each is a fixed enumeration with its rate attached.

use crate::error::CoreError;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Fixed rates
// ---------------------------------------------------------------------------

/// Material cost per square metre for project types outside the curated table.
pub const DEFAULT_MATERIAL_UNIT_COST: Money = 400_000;
/// Wage per worker per day.
pub const DAILY_WAGE: Money = 150_000;
/// Transport cost per kilometre.
pub const TRANSPORT_RATE_PER_KM: Money = 5_000;
/// Markup applied to the production cost, in whole percent.
pub const MARGIN_PERCENT: Money = 20;
/// Largest discount fraction that will ever be applied.
pub const MAX_DISCOUNT: f64 = 0.15;
/// Largest project area accepted, in square metres.
pub const MAX_AREA_M2: f64 = 1_000_000.0;
/// Largest site distance accepted, in kilometres.
pub const MAX_DISTANCE_KM: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Project types
// ---------------------------------------------------------------------------

/// Project types with a curated material unit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Kolam,
    Taman,
    Gazebo,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Kolam, Self::Taman, Self::Gazebo];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Kolam => "kolam",
            Self::Taman => "taman",
            Self::Gazebo => "gazebo",
        }
    }

    /// Material cost per square metre.
    pub fn material_unit_cost(self) -> Money {
        match self {
            Self::Kolam => 500_000,
            Self::Taman => 300_000,
            Self::Gazebo => 700_000,
        }
    }
}

/// Unit cost for any project type label, falling back to
/// [`DEFAULT_MATERIAL_UNIT_COST`] for labels outside the curated table.
pub fn material_unit_cost(label: &str) -> Money {
    ProjectType::from_label(label)
        .map(ProjectType::material_unit_cost)
        .unwrap_or(DEFAULT_MATERIAL_UNIT_COST)
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Cerah,
    Mendung,
    Hujan,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Self::Cerah, Self::Mendung, Self::Hujan];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cerah => "cerah",
            Self::Mendung => "mendung",
            Self::Hujan => "hujan",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Cerah => 1.0,
            Self::Mendung => 1.05,
            Self::Hujan => 1.15,
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|w| w.label().to_string()).collect()
    }
}

// ---------------------------------------------------------------------------
// Detail level
// ---------------------------------------------------------------------------

pub const MIN_DETAIL_LEVEL: u8 = 1;
pub const MAX_DETAIL_LEVEL: u8 = 5;

const DETAIL_MULTIPLIERS: [f64; MAX_DETAIL_LEVEL as usize] = [1.0, 1.1, 1.2, 1.3, 1.5];

/// Requested finish/complexity, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DetailLevel(u8);

impl DetailLevel {
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn multiplier(self) -> f64 {
        DETAIL_MULTIPLIERS[usize::from(self.0 - MIN_DETAIL_LEVEL)]
    }
}

impl TryFrom<i64> for DetailLevel {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|level| (MIN_DETAIL_LEVEL..=MAX_DETAIL_LEVEL).contains(level))
            .map(DetailLevel)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "tingkat_detail must be between {MIN_DETAIL_LEVEL} and {MAX_DETAIL_LEVEL}, got {value}"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
