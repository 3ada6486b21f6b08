//! Tests for the ROI calculation core.

use approx::assert_relative_eq;
use std::path::Path;

use agroguard_roi::calculator::{
    calculate, harvests_per_year, parse_land_area, recommend_device,
};
use agroguard_roi::data::{load_all_data, Dataset};
use agroguard_roi::error::RoiError;
use agroguard_roi::models::{
    DevicePackage, DeviceRecommendation, HorticultureRecord, IrrigationSystem, PlantType,
};

fn dataset() -> Dataset {
    load_all_data(Path::new("data")).expect("Failed to load data")
}

fn test_device() -> DeviceRecommendation {
    DeviceRecommendation {
        device_count: 1,
        hardware_cost: 2_500_000.0,
        monthly_subscription: 150_000.0,
        package: DevicePackage {
            name: "Paket Mula".to_string(),
            description: "Satu node sensor".to_string(),
            max_area_sqm: Some(2000.0),
            device_count: 1,
            hardware_cost: 2_500_000.0,
            monthly_subscription: 150_000.0,
        },
    }
}

#[test]
fn test_reference_scenario_malang_tomat() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 100.0).expect("Should recommend a package");

    let result = calculate(
        "Malang",
        PlantType::Tomat,
        "100",
        IrrigationSystem::OtomatisIot,
        &dataset.horticulture,
        Some(&device),
    )
    .expect("Reference scenario should calculate");

    assert_relative_eq!(result.baseline_productivity, 5.0);
    assert_relative_eq!(result.baseline_production_kg, 500.0);
    assert_relative_eq!(result.baseline_revenue, 4_000_000.0);
    assert!(
        result.agroguard_productivity > result.baseline_productivity,
        "AGROGUARD yield should beat the baseline"
    );
    assert_relative_eq!(result.agroguard_productivity, 7.0); // 5.0 * 1.40
    assert_eq!(result.harvest_per_year, 4); // round(365 / 90)
    assert_eq!(result.device_count, 1);
    assert_eq!(result.package_name, "Paket Mula");
    assert!(result.payback_months >= 1);
}

#[test]
fn test_roi_matches_benefit_over_investment() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 2500.0).unwrap();

    let result = calculate(
        "Batu",
        PlantType::Cabai,
        "2500",
        IrrigationSystem::SemiOtomatis,
        &dataset.horticulture,
        Some(&device),
    )
    .unwrap();

    assert_relative_eq!(
        result.roi_pct,
        result.total_benefit / result.total_investment * 100.0
    );
    assert_relative_eq!(
        result.total_investment,
        result.hardware_cost + result.annual_subscription
    );
    assert_relative_eq!(
        result.total_benefit,
        result.total_savings + result.additional_revenue
    );
}

#[test]
fn test_idempotence() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 100.0).unwrap();

    let first = calculate(
        "Malang",
        PlantType::Tomat,
        "100",
        IrrigationSystem::OtomatisIot,
        &dataset.horticulture,
        Some(&device),
    )
    .unwrap();
    let second = calculate(
        "Malang",
        PlantType::Tomat,
        "100",
        IrrigationSystem::OtomatisIot,
        &dataset.horticulture,
        Some(&device),
    )
    .unwrap();

    assert_eq!(first, second, "Same input must produce identical results");
}

#[test]
fn test_production_scales_linearly_with_area() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 100.0).unwrap();

    let small = calculate(
        "Kediri",
        PlantType::Melon,
        "100",
        IrrigationSystem::Manual,
        &dataset.horticulture,
        Some(&device),
    )
    .unwrap();
    let large = calculate(
        "Kediri",
        PlantType::Melon,
        "200",
        IrrigationSystem::Manual,
        &dataset.horticulture,
        Some(&device),
    )
    .unwrap();

    assert!(large.baseline_production_kg > small.baseline_production_kg);
    assert!(large.baseline_revenue > small.baseline_revenue);
    assert!(large.agroguard_production_kg > small.agroguard_production_kg);
    assert!(large.agroguard_revenue > small.agroguard_revenue);
    assert_relative_eq!(
        large.baseline_production_kg,
        2.0 * small.baseline_production_kg
    );
}

#[test]
fn test_savings_non_negative_for_all_inputs() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 100.0).unwrap();

    for record in &dataset.horticulture {
        for irrigation in IrrigationSystem::ALL {
            let result = calculate(
                &record.kabupaten,
                record.plant,
                "100",
                irrigation,
                &dataset.horticulture,
                Some(&device),
            )
            .expect("Every table row should calculate");

            assert!(result.water_savings >= 0.0);
            assert!(result.fertilizer_savings >= 0.0);
            assert!(result.labor_savings >= 0.0);
            assert!(
                result.failure_savings >= 0.0,
                "Failure savings negative for {} / {} / {}",
                record.kabupaten,
                record.plant,
                irrigation
            );
            assert!(result.payback_months >= 1);
        }
    }
}

#[test]
fn test_land_area_boundary() {
    let dataset = dataset();
    let device = test_device();

    let at_minimum = calculate(
        "Malang",
        PlantType::Tomat,
        "1",
        IrrigationSystem::Manual,
        &dataset.horticulture,
        Some(&device),
    );
    assert!(at_minimum.is_ok(), "1 m² is the accepted minimum");

    for bad in ["0", "-5", "0.5", "abc", "", "NaN", "inf"] {
        let result = calculate(
            "Malang",
            PlantType::Tomat,
            bad,
            IrrigationSystem::Manual,
            &dataset.horticulture,
            Some(&device),
        );
        assert!(
            matches!(result, Err(RoiError::InvalidLandArea(_))),
            "'{}' should be rejected as invalid land area",
            bad
        );
    }
}

#[test]
fn test_parse_land_area_trims_whitespace() {
    assert_eq!(parse_land_area(" 100 ").unwrap(), 100.0);
    assert_eq!(parse_land_area("1.5").unwrap(), 1.5);
}

#[test]
fn test_unknown_region() {
    let dataset = dataset();
    let device = test_device();

    let result = calculate(
        "Atlantis",
        PlantType::Tomat,
        "100",
        IrrigationSystem::Manual,
        &dataset.horticulture,
        Some(&device),
    );
    assert_eq!(result, Err(RoiError::UnknownRegion("Atlantis".to_string())));
}

#[test]
fn test_plant_missing_from_region() {
    // A region that only grows tomat; asking for cabai must fail loudly.
    let table = vec![HorticultureRecord {
        kabupaten: "Malang".to_string(),
        plant: PlantType::Tomat,
        productivity: 5.0,
        price_per_kg: 8000.0,
        harvest_cycle_days: 90.0,
        water_cost: 2000.0,
        fertilizer_cost: 3000.0,
        labor_cost: 4500.0,
    }];
    let device = test_device();

    let result = calculate(
        "Malang",
        PlantType::Cabai,
        "100",
        IrrigationSystem::Manual,
        &table,
        Some(&device),
    );
    assert_eq!(result, Err(RoiError::UnknownPlantType("cabai".to_string())));
}

#[test]
fn test_missing_device_recommendation() {
    let dataset = dataset();

    let result = calculate(
        "Malang",
        PlantType::Tomat,
        "100",
        IrrigationSystem::OtomatisIot,
        &dataset.horticulture,
        None,
    );
    assert_eq!(result, Err(RoiError::MissingDeviceRecommendation));
}

#[test]
fn test_non_recoverable_investment() {
    // A crop that yields nothing and costs nothing produces zero benefit:
    // ROI and payback are undefined and must be refused, not divided.
    let table = vec![HorticultureRecord {
        kabupaten: "Malang".to_string(),
        plant: PlantType::Tomat,
        productivity: 0.0,
        price_per_kg: 8000.0,
        harvest_cycle_days: 90.0,
        water_cost: 0.0,
        fertilizer_cost: 0.0,
        labor_cost: 0.0,
    }];
    let device = test_device();

    let result = calculate(
        "Malang",
        PlantType::Tomat,
        "100",
        IrrigationSystem::OtomatisIot,
        &table,
        Some(&device),
    );
    assert_eq!(result, Err(RoiError::NonRecoverableInvestment));
}

#[test]
fn test_harvests_per_year() {
    assert_eq!(harvests_per_year(90.0), 4); // round(4.06)
    assert_eq!(harvests_per_year(70.0), 5); // round(5.21)
    assert_eq!(harvests_per_year(365.0), 1);
    assert_eq!(harvests_per_year(1000.0), 1); // floored at one harvest
    assert_eq!(harvests_per_year(0.0), 1);
}

#[test]
fn test_recommend_device_tiers() {
    let dataset = dataset();

    assert_eq!(recommend_device(&dataset.packages, 100.0).unwrap().device_count, 1);
    assert_eq!(recommend_device(&dataset.packages, 2000.0).unwrap().device_count, 1);
    assert_eq!(recommend_device(&dataset.packages, 3000.0).unwrap().device_count, 2);
    assert_eq!(recommend_device(&dataset.packages, 8000.0).unwrap().device_count, 4);
    // Open-ended top tier catches arbitrarily large plots
    assert_eq!(recommend_device(&dataset.packages, 50_000.0).unwrap().device_count, 8);
}

#[test]
fn test_recommend_device_empty_table() {
    let result = recommend_device(&[], 100.0);
    assert_eq!(result, Err(RoiError::MissingDeviceRecommendation));
}

#[test]
fn test_improvement_ordering_carries_into_results() {
    let dataset = dataset();
    let device = recommend_device(&dataset.packages, 100.0).unwrap();

    let mut revenues = Vec::new();
    for irrigation in IrrigationSystem::ALL {
        let result = calculate(
            "Malang",
            PlantType::Tomat,
            "100",
            irrigation,
            &dataset.horticulture,
            Some(&device),
        )
        .unwrap();
        revenues.push(result.agroguard_revenue);
    }

    assert!(
        revenues[0] < revenues[1] && revenues[1] < revenues[2],
        "More automation should mean more revenue"
    );
}
