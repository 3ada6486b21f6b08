//! AGROGUARD ROI - Command Line Interface
//!
//! This is the main entry point for the ROI calculation tool.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::error::Error;
use std::path::Path;

use agroguard_roi::{
    calculator::{calculate, recommend_device},
    data::load_all_data,
    display::{display_results, format_area},
    models::{IrrigationSystem, PlantType},
    share,
};

/// Command-line arguments for the ROI calculator.
#[derive(Parser, Debug)]
#[command(name = "agroguard-roi")]
#[command(author, version, about = "Calculate the ROI of AGROGUARD IoT monitoring for a horticulture plot", long_about = None)]
struct Args {
    /// Kabupaten (region) the plot is in
    #[arg(short = 'r', long)]
    region: Option<String>,

    /// Plant type (tomat, cabai, terong, semangka, melon)
    #[arg(short, long)]
    plant: Option<String>,

    /// Land area in m²
    #[arg(short, long)]
    land_area: Option<String>,

    /// Irrigation system (manual, semi-otomatis, otomatis-iot)
    #[arg(short, long, default_value = "otomatis-iot")]
    irrigation: String,

    /// Restore all inputs from a shared result link instead of the flags above
    #[arg(long, conflicts_with_all = ["region", "plant", "land_area"])]
    link: Option<String>,

    /// Directory containing the data tables
    #[arg(long, default_value = "data")]
    data_dir: String,

    /// List the regions in the productivity table and exit
    #[arg(long, default_value = "false")]
    list_regions: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let data_dir = Path::new(&args.data_dir);
    if !data_dir.exists() {
        eprintln!(
            "Error: data directory '{}' not found. Please run from the project root.",
            args.data_dir
        );
        std::process::exit(1);
    }

    let dataset = load_all_data(data_dir)?;

    if args.list_regions {
        println!("Regions in the productivity table:");
        for region in dataset.regions() {
            println!("  {}", region);
        }
        return Ok(());
    }

    // Resolve the four inputs either from a shared link or from the flags
    let (region, plant, land_area_text, irrigation) = if let Some(ref link) = args.link {
        let params = share::decode(link)?;
        (
            params.kabupaten,
            params.plant,
            params.land_area_sqm.to_string(),
            params.irrigation,
        )
    } else {
        let region = args
            .region
            .ok_or("missing --region (or use --link to restore a shared result)")?;
        let plant: PlantType = args.plant.ok_or("missing --plant")?.parse()?;
        let land_area = args.land_area.ok_or("missing --land-area")?;
        let irrigation: IrrigationSystem = args.irrigation.parse()?;
        (region, plant, land_area, irrigation)
    };

    println!("AGROGUARD - Kalkulator ROI");
    println!("================================================================");
    println!();
    println!("Configuration:");
    println!("  Kabupaten:       {}", region);
    println!("  Tanaman:         {}", plant);
    println!("  Irigasi:         {}", irrigation.label());

    let land_area_sqm = agroguard_roi::calculator::parse_land_area(&land_area_text)?;
    println!("  Luas Lahan:      {}", format_area(land_area_sqm));

    let device = recommend_device(&dataset.packages, land_area_sqm)?;
    println!();
    println!(
        "Rekomendasi paket: {} ({} perangkat) - {}",
        device.package.name, device.device_count, device.package.description
    );

    let result = calculate(
        &region,
        plant,
        &land_area_text,
        irrigation,
        &dataset.horticulture,
        Some(&device),
    )?;

    display_results(&result);

    let query = share::encode(&result.kabupaten, plant, result.land_area_sqm, irrigation);
    println!("Bagikan hasil: /hasil-roi?{}", query);
    println!();

    Ok(())
}
