//! The ROI calculation core.
//!
//! This module contains the pure comparison model between traditional
//! farming and AGROGUARD-assisted farming, plus the device recommendation
//! lookup that resolves a package tier for a plot before the calculation
//! runs. The calculation reads nothing but its arguments and the fixed
//! constants below, so identical inputs always produce identical results.

use crate::error::RoiError;
use crate::models::{
    DevicePackage, DeviceRecommendation, HorticultureRecord, IrrigationSystem, PlantType,
    RoiResult,
};

/// Fraction of yearly water cost eliminated by sensor-driven irrigation.
pub const WATER_SAVINGS_RATE: f64 = 0.50;
/// Fraction of yearly fertilizer cost eliminated by soil-nutrient monitoring.
pub const FERTILIZER_SAVINGS_RATE: f64 = 0.35;
/// Fraction of yearly labor cost eliminated by remote monitoring.
pub const LABOR_SAVINGS_RATE: f64 = 0.40;
/// Crop-failure loss under traditional farming, as a fraction of revenue.
pub const BASELINE_FAILURE_RATE: f64 = 0.07;
/// Crop-failure loss with AGROGUARD monitoring, as a fraction of revenue.
pub const AGROGUARD_FAILURE_RATE: f64 = 0.015;

/// Minimum accepted land area in m².
pub const MIN_LAND_AREA_SQM: f64 = 1.0;

/// Parses a land-area text field into m².
///
/// The text must parse to a finite number of at least
/// [`MIN_LAND_AREA_SQM`]; anything else is [`RoiError::InvalidLandArea`].
///
/// # Example
///
/// ```
/// use agroguard_roi::calculator::parse_land_area;
///
/// assert_eq!(parse_land_area("100").unwrap(), 100.0);
/// assert!(parse_land_area("0").is_err());
/// assert!(parse_land_area("abc").is_err());
/// ```
pub fn parse_land_area(text: &str) -> Result<f64, RoiError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(area) if area.is_finite() && area >= MIN_LAND_AREA_SQM => Ok(area),
        _ => Err(RoiError::InvalidLandArea(trimmed.to_string())),
    }
}

/// Number of harvests per year for a given cycle length in days.
///
/// `round(365 / cycle)`, floored at 1 so even very long cycles count one
/// harvest.
pub fn harvests_per_year(harvest_cycle_days: f64) -> u32 {
    if harvest_cycle_days <= 0.0 {
        return 1;
    }
    ((365.0 / harvest_cycle_days).round() as u32).max(1)
}

/// Resolves a device recommendation for a plot from the package tier table.
///
/// Walks the tiers in order and returns the first whose coverage includes the
/// plot; the open-ended top tier (`max_area_sqm = None`) catches everything
/// larger. An empty or exhausted table is
/// [`RoiError::MissingDeviceRecommendation`].
pub fn recommend_device(
    packages: &[DevicePackage],
    land_area_sqm: f64,
) -> Result<DeviceRecommendation, RoiError> {
    packages
        .iter()
        .find(|p| p.max_area_sqm.map_or(true, |max| land_area_sqm <= max))
        .map(|p| DeviceRecommendation {
            device_count: p.device_count,
            hardware_cost: p.hardware_cost,
            monthly_subscription: p.monthly_subscription,
            package: p.clone(),
        })
        .ok_or(RoiError::MissingDeviceRecommendation)
}

/// Runs the full ROI comparison for one plot.
///
/// # Arguments
///
/// * `kabupaten` - Region name, matched case-insensitively against the table
/// * `plant` - Crop grown on the plot
/// * `land_area_text` - Raw land-area text from the input form, in m²
/// * `irrigation` - Irrigation tier, which sets the productivity improvement
/// * `table` - Horticulture productivity table
/// * `device` - Resolved device recommendation; `None` means the async
///   recommendation lookup has not completed and the calculation is refused
///
/// # Returns
///
/// A fully populated [`RoiResult`], or the specific [`RoiError`] naming the
/// input that failed validation. ROI and payback are guarded: a total
/// benefit or investment that is not positive is
/// [`RoiError::NonRecoverableInvestment`] instead of an infinite or negative
/// figure.
pub fn calculate(
    kabupaten: &str,
    plant: PlantType,
    land_area_text: &str,
    irrigation: IrrigationSystem,
    table: &[HorticultureRecord],
    device: Option<&DeviceRecommendation>,
) -> Result<RoiResult, RoiError> {
    let land_area_sqm = parse_land_area(land_area_text)?;
    let device = device.ok_or(RoiError::MissingDeviceRecommendation)?;

    let kabupaten = kabupaten.trim();
    let region_rows: Vec<&HorticultureRecord> = table
        .iter()
        .filter(|r| r.kabupaten.eq_ignore_ascii_case(kabupaten))
        .collect();
    if region_rows.is_empty() {
        return Err(RoiError::UnknownRegion(kabupaten.to_string()));
    }
    let record = region_rows
        .iter()
        .find(|r| r.plant == plant)
        .ok_or_else(|| RoiError::UnknownPlantType(plant.as_str().to_string()))?;

    // Baseline (traditional farming)
    let baseline_productivity = record.productivity;
    let baseline_production_kg = baseline_productivity * land_area_sqm;
    let baseline_revenue = baseline_production_kg * record.price_per_kg;
    let baseline_water_cost = record.water_cost * land_area_sqm;
    let baseline_fertilizer_cost = record.fertilizer_cost * land_area_sqm;
    let baseline_labor_cost = record.labor_cost * land_area_sqm;
    let baseline_failure_loss = baseline_revenue * BASELINE_FAILURE_RATE;
    let baseline_total_cost =
        baseline_water_cost + baseline_fertilizer_cost + baseline_labor_cost + baseline_failure_loss;

    // With AGROGUARD
    let improvement = irrigation.improvement_factor();
    let agroguard_productivity = baseline_productivity * (1.0 + improvement);
    let agroguard_production_kg = agroguard_productivity * land_area_sqm;
    let agroguard_revenue = agroguard_production_kg * record.price_per_kg;
    let agroguard_water_cost = baseline_water_cost * (1.0 - WATER_SAVINGS_RATE);
    let agroguard_fertilizer_cost = baseline_fertilizer_cost * (1.0 - FERTILIZER_SAVINGS_RATE);
    let agroguard_labor_cost = baseline_labor_cost * (1.0 - LABOR_SAVINGS_RATE);
    let agroguard_failure_loss = agroguard_revenue * AGROGUARD_FAILURE_RATE;

    let hardware_cost = device.hardware_cost;
    let annual_subscription = device.monthly_subscription * 12.0;
    let agroguard_operational_cost = agroguard_water_cost
        + agroguard_fertilizer_cost
        + agroguard_labor_cost
        + agroguard_failure_loss
        + hardware_cost
        + annual_subscription;

    // Comparison
    let water_savings = baseline_water_cost - agroguard_water_cost;
    let fertilizer_savings = baseline_fertilizer_cost - agroguard_fertilizer_cost;
    let labor_savings = baseline_labor_cost - agroguard_labor_cost;
    let failure_savings = baseline_failure_loss - agroguard_failure_loss;
    let total_savings = water_savings + fertilizer_savings + labor_savings + failure_savings;
    let additional_revenue = agroguard_revenue - baseline_revenue;
    let total_benefit = total_savings + additional_revenue;
    let total_investment = hardware_cost + annual_subscription;

    if total_benefit <= 0.0 || total_investment <= 0.0 {
        return Err(RoiError::NonRecoverableInvestment);
    }

    let roi_pct = total_benefit / total_investment * 100.0;
    let payback_months = ((12.0 * total_investment / total_benefit).ceil() as u32).max(1);

    Ok(RoiResult {
        kabupaten: record.kabupaten.clone(),
        plant: plant.as_str().to_string(),
        irrigation: irrigation.as_str().to_string(),
        land_area_sqm,
        price_per_kg: record.price_per_kg,
        harvest_cycle_days: record.harvest_cycle_days,
        harvest_per_year: harvests_per_year(record.harvest_cycle_days),

        baseline_productivity,
        baseline_production_kg,
        baseline_revenue,
        baseline_water_cost,
        baseline_fertilizer_cost,
        baseline_labor_cost,
        baseline_failure_loss,
        baseline_total_cost,

        agroguard_productivity,
        agroguard_production_kg,
        agroguard_revenue,
        agroguard_water_cost,
        agroguard_fertilizer_cost,
        agroguard_labor_cost,
        agroguard_failure_loss,
        agroguard_operational_cost,
        hardware_cost,
        annual_subscription,
        device_count: device.device_count,
        package_name: device.package.name.clone(),
        package_description: device.package.description.clone(),

        productivity_increase_pct: improvement * 100.0,
        water_savings,
        fertilizer_savings,
        labor_savings,
        failure_savings,
        total_savings,
        additional_revenue,
        total_benefit,
        total_investment,
        roi_pct,
        payback_months,
    })
}
