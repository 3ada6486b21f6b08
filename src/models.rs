//! Data models and structures for the AGROGUARD ROI engine.
//!
//! This module contains the core types used throughout the crate: the closed
//! plant and irrigation enums, the horticulture productivity table rows, the
//! device package tiers, and the full calculation result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoiError;

/// Horticulture plant types supported by the productivity table.
///
/// The wire representation is the lowercase Indonesian name, which is also
/// what the share-link codec and the web front-end exchange.
///
/// # Example
///
/// ```
/// use agroguard_roi::models::PlantType;
///
/// let plant: PlantType = "tomat".parse().unwrap();
/// assert_eq!(plant, PlantType::Tomat);
/// assert_eq!(plant.as_str(), "tomat");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Tomat,
    Cabai,
    Terong,
    Semangka,
    Melon,
}

impl PlantType {
    /// All plant types, in table order.
    pub const ALL: [PlantType; 5] = [
        PlantType::Tomat,
        PlantType::Cabai,
        PlantType::Terong,
        PlantType::Semangka,
        PlantType::Melon,
    ];

    /// Canonical wire string for this plant type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Tomat => "tomat",
            PlantType::Cabai => "cabai",
            PlantType::Terong => "terong",
            PlantType::Semangka => "semangka",
            PlantType::Melon => "melon",
        }
    }
}

impl FromStr for PlantType {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tomat" => Ok(PlantType::Tomat),
            "cabai" => Ok(PlantType::Cabai),
            "terong" => Ok(PlantType::Terong),
            "semangka" => Ok(PlantType::Semangka),
            "melon" => Ok(PlantType::Melon),
            other => Err(RoiError::UnknownPlantType(other.to_string())),
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Irrigation system tiers, from fully manual watering up to the AGROGUARD
/// closed-loop IoT controller.
///
/// Each tier carries the productivity improvement factor applied on top of
/// the baseline yield. The factors are strictly increasing with automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IrrigationSystem {
    /// Hand watering, no automation.
    Manual,
    /// Timer-driven drip or sprinkler lines.
    SemiOtomatis,
    /// Sensor-driven closed-loop irrigation (AGROGUARD device tier).
    OtomatisIot,
}

impl IrrigationSystem {
    /// All irrigation tiers, least to most automated.
    pub const ALL: [IrrigationSystem; 3] = [
        IrrigationSystem::Manual,
        IrrigationSystem::SemiOtomatis,
        IrrigationSystem::OtomatisIot,
    ];

    /// Canonical wire string for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationSystem::Manual => "manual",
            IrrigationSystem::SemiOtomatis => "semi-otomatis",
            IrrigationSystem::OtomatisIot => "otomatis-iot",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            IrrigationSystem::Manual => "Manual",
            IrrigationSystem::SemiOtomatis => "Semi Otomatis",
            IrrigationSystem::OtomatisIot => "Otomatis IoT",
        }
    }

    /// Fractional productivity improvement over the baseline yield when the
    /// crop is monitored by AGROGUARD with this irrigation tier.
    pub fn improvement_factor(&self) -> f64 {
        match self {
            IrrigationSystem::Manual => 0.15,
            IrrigationSystem::SemiOtomatis => 0.25,
            IrrigationSystem::OtomatisIot => 0.40,
        }
    }
}

impl FromStr for IrrigationSystem {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(IrrigationSystem::Manual),
            "semi-otomatis" => Ok(IrrigationSystem::SemiOtomatis),
            "otomatis-iot" => Ok(IrrigationSystem::OtomatisIot),
            other => Err(RoiError::UnknownIrrigationSystem(other.to_string())),
        }
    }
}

impl fmt::Display for IrrigationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the horticulture productivity table: the baseline (traditional
/// farming) figures for a single region and plant type.
///
/// Monetary figures are rupiah; per-area costs are per m² per year.
///
/// # Example
///
/// ```
/// use agroguard_roi::models::{HorticultureRecord, PlantType};
///
/// let row = HorticultureRecord {
///     kabupaten: "Malang".to_string(),
///     plant: PlantType::Tomat,
///     productivity: 5.0,
///     price_per_kg: 8000.0,
///     harvest_cycle_days: 90.0,
///     water_cost: 2000.0,
///     fertilizer_cost: 3000.0,
///     labor_cost: 4500.0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HorticultureRecord {
    /// Administrative region (kabupaten) name.
    pub kabupaten: String,
    /// Plant this row applies to.
    pub plant: PlantType,
    /// Baseline yield in kg per m² per year.
    pub productivity: f64,
    /// Farm-gate price per kg.
    pub price_per_kg: f64,
    /// Days from planting to harvest for one cycle.
    pub harvest_cycle_days: f64,
    /// Yearly water cost per m².
    pub water_cost: f64,
    /// Yearly fertilizer cost per m².
    pub fertilizer_cost: f64,
    /// Yearly labor cost per m².
    pub labor_cost: f64,
}

/// One tier of the device package table.
///
/// Tiers are ordered by ascending `max_area_sqm`; the open-ended top tier
/// has `max_area_sqm = None` and catches every larger plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevicePackage {
    /// Marketing name of the tier (e.g. "Paket Tani").
    pub name: String,
    /// Short description shown alongside the recommendation.
    pub description: String,
    /// Largest land area this tier covers, in m². `None` means unbounded.
    pub max_area_sqm: Option<f64>,
    /// Number of sensor nodes in the tier.
    pub device_count: u32,
    /// One-time hardware cost in rupiah.
    pub hardware_cost: f64,
    /// Monthly subscription in rupiah.
    pub monthly_subscription: f64,
}

/// A device recommendation for a specific plot, resolved from the package
/// tier table before the calculation runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecommendation {
    /// Number of sensor nodes to install.
    pub device_count: u32,
    /// One-time hardware cost in rupiah.
    pub hardware_cost: f64,
    /// Monthly subscription in rupiah.
    pub monthly_subscription: f64,
    /// The package tier the recommendation came from.
    pub package: DevicePackage,
}

/// Complete output of one ROI calculation.
///
/// Built wholesale by [`crate::calculator::calculate`] and never mutated;
/// every field is derived from the inputs and the fixed model constants.
/// Monetary fields are rupiah per year unless stated otherwise and are all
/// non-negative for valid inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    // Inputs echoed for display
    /// Region the calculation was run for.
    pub kabupaten: String,
    /// Plant type, wire string form.
    pub plant: String,
    /// Irrigation tier, wire string form.
    pub irrigation: String,
    /// Land area in m².
    pub land_area_sqm: f64,
    /// Farm-gate price per kg.
    pub price_per_kg: f64,
    /// Harvest cycle length in days.
    pub harvest_cycle_days: f64,
    /// Harvests per year, `round(365 / cycle)`, at least 1.
    pub harvest_per_year: u32,

    // Baseline (traditional farming)
    /// Baseline yield in kg per m² per year.
    pub baseline_productivity: f64,
    /// Baseline production in kg per year.
    pub baseline_production_kg: f64,
    /// Baseline revenue.
    pub baseline_revenue: f64,
    /// Baseline yearly water cost.
    pub baseline_water_cost: f64,
    /// Baseline yearly fertilizer cost.
    pub baseline_fertilizer_cost: f64,
    /// Baseline yearly labor cost.
    pub baseline_labor_cost: f64,
    /// Baseline crop-failure loss.
    pub baseline_failure_loss: f64,
    /// Sum of the four baseline cost categories.
    pub baseline_total_cost: f64,

    // With AGROGUARD
    /// Yield with AGROGUARD, kg per m² per year.
    pub agroguard_productivity: f64,
    /// Production with AGROGUARD, kg per year.
    pub agroguard_production_kg: f64,
    /// Revenue with AGROGUARD.
    pub agroguard_revenue: f64,
    /// Water cost with AGROGUARD.
    pub agroguard_water_cost: f64,
    /// Fertilizer cost with AGROGUARD.
    pub agroguard_fertilizer_cost: f64,
    /// Labor cost with AGROGUARD.
    pub agroguard_labor_cost: f64,
    /// Crop-failure loss with AGROGUARD.
    pub agroguard_failure_loss: f64,
    /// Reduced costs plus hardware and annual subscription.
    pub agroguard_operational_cost: f64,
    /// One-time hardware cost from the recommendation.
    pub hardware_cost: f64,
    /// Twelve months of subscription.
    pub annual_subscription: f64,
    /// Recommended number of sensor nodes.
    pub device_count: u32,
    /// Recommended package tier name.
    pub package_name: String,
    /// Recommended package tier description.
    pub package_description: String,

    // Comparison
    /// Productivity increase over baseline, percent.
    pub productivity_increase_pct: f64,
    /// Yearly water cost savings.
    pub water_savings: f64,
    /// Yearly fertilizer cost savings.
    pub fertilizer_savings: f64,
    /// Yearly labor cost savings.
    pub labor_savings: f64,
    /// Reduction in crop-failure loss.
    pub failure_savings: f64,
    /// Sum of the four savings categories.
    pub total_savings: f64,
    /// AGROGUARD revenue minus baseline revenue.
    pub additional_revenue: f64,
    /// Total savings plus additional revenue.
    pub total_benefit: f64,
    /// Hardware cost plus annual subscription.
    pub total_investment: f64,
    /// First-year return on investment, percent.
    pub roi_pct: f64,
    /// Months until cumulative benefit covers the investment, at least 1.
    pub payback_months: u32,
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for the horticulture productivity table.
#[derive(Debug, Deserialize)]
pub struct HorticultureRow {
    /// Region name
    pub kabupaten: String,
    /// Plant type wire string
    pub plant: String,
    /// Baseline yield, kg/m²/yr
    pub productivity: f64,
    /// Price per kg
    pub price_per_kg: f64,
    /// Harvest cycle in days
    pub harvest_cycle_days: f64,
    /// Yearly water cost per m²
    pub water_cost: f64,
    /// Yearly fertilizer cost per m²
    pub fertilizer_cost: f64,
    /// Yearly labor cost per m²
    pub labor_cost: f64,
}

/// CSV row structure for the device package tier table.
#[derive(Debug, Deserialize)]
pub struct DevicePackageRow {
    /// Tier name
    pub name: String,
    /// Tier description
    pub description: String,
    /// Largest covered area in m² (empty = unbounded top tier)
    pub max_area_sqm: Option<f64>,
    /// Sensor node count
    pub device_count: u32,
    /// One-time hardware cost
    pub hardware_cost: f64,
    /// Monthly subscription
    pub monthly_subscription: f64,
}
