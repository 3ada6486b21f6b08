//! Data loading functionality for the AGROGUARD ROI engine.
//!
//! This module loads the two static tables the calculator consumes from CSV
//! files in the `data/` directory: the horticulture productivity table
//! (baseline yield and cost figures per region and plant) and the device
//! package tier table.

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::models::{
    DevicePackage, DevicePackageRow, HorticultureRecord, HorticultureRow, PlantType,
};

/// The two static tables backing every calculation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Productivity table rows, one per region × plant.
    pub horticulture: Vec<HorticultureRecord>,
    /// Device package tiers, ordered by ascending coverage.
    pub packages: Vec<DevicePackage>,
}

impl Dataset {
    /// Finds the productivity row for a region and plant.
    ///
    /// Region matching is case-insensitive; plant matching is exact.
    pub fn find_record(&self, kabupaten: &str, plant: PlantType) -> Option<&HorticultureRecord> {
        self.horticulture
            .iter()
            .find(|r| r.kabupaten.eq_ignore_ascii_case(kabupaten.trim()) && r.plant == plant)
    }

    /// Returns `true` if any row exists for the region, regardless of plant.
    pub fn has_region(&self, kabupaten: &str) -> bool {
        self.horticulture
            .iter()
            .any(|r| r.kabupaten.eq_ignore_ascii_case(kabupaten.trim()))
    }

    /// Distinct region names, in table order.
    pub fn regions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.horticulture {
            if !names
                .iter()
                .any(|n| n.eq_ignore_ascii_case(&record.kabupaten))
            {
                names.push(&record.kabupaten);
            }
        }
        names
    }
}

/// Loads the horticulture productivity table from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the horticulture CSV file
///
/// # Returns
///
/// A vector of [`HorticultureRecord`], one per region × plant row,
/// or an error if the file cannot be read or parsed.
///
/// # CSV Format
///
/// Expected columns: `kabupaten, plant, productivity, price_per_kg, harvest_cycle_days, water_cost, fertilizer_cost, labor_cost`
pub fn load_horticulture(path: &Path) -> Result<Vec<HorticultureRecord>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: HorticultureRow = result?;
        let plant: PlantType = row.plant.parse()?;
        records.push(HorticultureRecord {
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
    Ok(records)
}

/// Loads the device package tier table from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to the device package CSV file
///
/// # Returns
///
/// A vector of [`DevicePackage`] tiers in file order (ascending coverage,
/// open-ended tier last), or an error if the file cannot be read or parsed.
///
/// # CSV Format
///
/// Expected columns: `name, description, max_area_sqm, device_count, hardware_cost, monthly_subscription`
///
/// # Notes
///
/// An empty `max_area_sqm` field marks the unbounded top tier.
pub fn load_device_packages(path: &Path) -> Result<Vec<DevicePackage>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut packages = Vec::new();
    for result in rdr.deserialize() {
        let row: DevicePackageRow = result?;
        packages.push(DevicePackage {
            name: row.name,
            description: row.description,
            max_area_sqm: row.max_area_sqm,
            device_count: row.device_count,
            hardware_cost: row.hardware_cost,
            monthly_subscription: row.monthly_subscription,
        });
    }
    Ok(packages)
}

/// Loads both tables from the data directory.
///
/// # Arguments
///
/// * `data_dir` - Path to the directory containing the CSV files
///
/// # Returns
///
/// A [`Dataset`] with the productivity table and the package tiers,
/// or an error if any file cannot be read.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use agroguard_roi::data::load_all_data;
///
/// let dataset = load_all_data(Path::new("data")).unwrap();
/// println!("Loaded {} productivity rows", dataset.horticulture.len());
/// ```
pub fn load_all_data(data_dir: &Path) -> Result<Dataset, Box<dyn Error>> {
    Ok(Dataset {
        horticulture: load_horticulture(&data_dir.join("horticulture.csv"))?,
        packages: load_device_packages(&data_dir.join("device_packages.csv"))?,
    })
}
