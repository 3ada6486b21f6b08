//! WebAssembly bindings for the AGROGUARD ROI engine.
//!
//! This module provides the JavaScript-accessible functions the marketing
//! site calls: run a calculation, decode a shared result link, and list
//! the supported regions. All functions take and return JSON strings and
//! report failures through a `success`/`error` envelope instead of
//! panicking.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::calculator::{calculate, recommend_device};
use crate::data::Dataset;
use crate::error::RoiError;
use crate::models::{
    DevicePackage, HorticultureRecord, IrrigationSystem, PlantType, RoiResult,
};
use crate::share::{self, ShareParams};

/// JavaScript-friendly calculation input.
#[derive(Debug, Clone, Deserialize)]
pub struct JsCalculateInput {
    pub kabupaten: String,
    pub plant: String,
    /// Raw text from the land-area field, in m².
    pub land_area: String,
    pub irrigation: String,
}

/// JavaScript-friendly calculation result envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsCalculateResult {
    pub success: bool,
    pub error: Option<String>,
    pub result: Option<RoiResult>,
    /// Query string for sharing this calculation, present on success.
    pub share_query: Option<String>,
}

/// JavaScript-friendly share-link decode envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsDecodeResult {
    pub success: bool,
    pub error: Option<String>,
    pub params: Option<ShareParams>,
}

fn calculate_failure(error: String) -> String {
    serde_json::to_string(&JsCalculateResult {
        success: false,
        error: Some(error),
        result: None,
        share_query: None,
    })
    .unwrap_or_default()
}

/// Embedded copies of the data tables, compiled into the wasm binary so the
/// front-end needs no extra fetch.
fn get_embedded_dataset() -> Dataset {
    use csv::ReaderBuilder;

    let mut horticulture = Vec::new();
    let horticulture_data = include_str!("../data/horticulture.csv");
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(horticulture_data.as_bytes());
    for result in rdr.deserialize::<crate::models::HorticultureRow>() {
        if let Ok(row) = result {
            if let Ok(plant) = row.plant.parse::<PlantType>() {
                horticulture.push(HorticultureRecord {
                    kabupaten: row.kabupaten,
                    plant,
                    productivity: row.productivity,
                    price_per_kg: row.price_per_kg,
                    harvest_cycle_days: row.harvest_cycle_days,
                    water_cost: row.water_cost,
                    fertilizer_cost: row.fertilizer_cost,
                    labor_cost: row.labor_cost,
                });
            }
        }
    }

    let mut packages = Vec::new();
    let package_data = include_str!("../data/device_packages.csv");
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(package_data.as_bytes());
    for result in rdr.deserialize::<crate::models::DevicePackageRow>() {
        if let Ok(row) = result {
            packages.push(DevicePackage {
                name: row.name,
                description: row.description,
                max_area_sqm: row.max_area_sqm,
                device_count: row.device_count,
                hardware_cost: row.hardware_cost,
                monthly_subscription: row.monthly_subscription,
            });
        }
    }

    Dataset {
        horticulture,
        packages,
    }
}

fn run_calculation(
    input: &JsCalculateInput,
    dataset: &Dataset,
) -> Result<(RoiResult, String), RoiError> {
    let plant: PlantType = input.plant.parse()?;
    let irrigation: IrrigationSystem = input.irrigation.parse()?;
    let land_area_sqm = crate::calculator::parse_land_area(&input.land_area)?;
    let device = recommend_device(&dataset.packages, land_area_sqm)?;
    let result = calculate(
        &input.kabupaten,
        plant,
        &input.land_area,
        irrigation,
        &dataset.horticulture,
        Some(&device),
    )?;
    let share_query = share::encode(&result.kabupaten, plant, land_area_sqm, irrigation);
    Ok((result, share_query))
}

/// Run the ROI calculation with the given configuration.
///
/// Takes a JSON string input and returns a JSON string envelope with the
/// full result and the shareable query for it.
#[wasm_bindgen]
pub fn calculate_roi(input_json: &str) -> String {
    let input: JsCalculateInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return calculate_failure(format!("Invalid input: {}", e)),
    };

    let dataset = get_embedded_dataset();
    match run_calculation(&input, &dataset) {
        Ok((result, share_query)) => {
            serde_json::to_string(&JsCalculateResult {
                success: true,
                error: None,
                result: Some(result),
                share_query: Some(share_query),
            })
            .unwrap_or_default()
        }
        Err(e) => calculate_failure(e.to_string()),
    }
}

/// Decode a shared result link back into the four calculation inputs.
///
/// Accepts the query string of a `/hasil-roi` link (with or without the
/// leading `?`) and returns a JSON envelope with the decoded parameters or
/// the specific validation failure.
#[wasm_bindgen]
pub fn decode_share_link(query: &str) -> String {
    let envelope = match share::decode(query) {
        Ok(params) => JsDecodeResult {
            success: true,
            error: None,
            params: Some(params),
        },
        Err(e) => JsDecodeResult {
            success: false,
            error: Some(e.to_string()),
            params: None,
        },
    };
    serde_json::to_string(&envelope).unwrap_or_default()
}

/// Get the list of regions in the productivity table.
/// Returns a JSON array of region names.
#[wasm_bindgen]
pub fn get_regions() -> String {
    let dataset = get_embedded_dataset();
    serde_json::to_string(&dataset.regions()).unwrap_or_default()
}

/// Get the version of the ROI engine.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
