//! Display and formatting utilities for the ROI engine.
//!
//! This module renders calculation results for the terminal and provides the
//! rupiah, area, percent and payback formatters the report and the web
//! front-end share. Number formatting follows Indonesian conventions: `.` as
//! the thousands separator and `,` as the decimal mark.

use crate::models::RoiResult;

/// Formats a rupiah amount with thousands separators.
///
/// The amount is rounded to whole rupiah.
///
/// # Example
///
/// ```
/// use agroguard_roi::display::format_rupiah;
///
/// assert_eq!(format_rupiah(4_000_000.0), "Rp 4.000.000");
/// assert_eq!(format_rupiah(150_000.5), "Rp 150.001");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", group_thousands(amount.round() as i64))
}

/// Formats a land area for display: m² with separators below one hectare,
/// hectares with two decimals from 10.000 m² up.
///
/// # Example
///
/// ```
/// use agroguard_roi::display::format_area;
///
/// assert_eq!(format_area(100.0), "100 m²");
/// assert_eq!(format_area(2500.0), "2.500 m²");
/// assert_eq!(format_area(15000.0), "1,50 ha");
/// ```
pub fn format_area(land_area_sqm: f64) -> String {
    if land_area_sqm >= 10_000.0 {
        let hectares = land_area_sqm / 10_000.0;
        format!("{:.2} ha", hectares).replace('.', ",")
    } else {
        format!("{} m²", group_thousands(land_area_sqm.round() as i64))
    }
}

/// Formats a percentage with one decimal and a comma decimal mark.
///
/// # Example
///
/// ```
/// use agroguard_roi::display::format_percent;
///
/// assert_eq!(format_percent(50.7), "50,7%");
/// assert_eq!(format_percent(40.0), "40,0%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

/// Formats a payback period in months, switching to years from one year up.
///
/// # Example
///
/// ```
/// use agroguard_roi::display::format_payback;
///
/// assert_eq!(format_payback(8), "8 bulan");
/// assert_eq!(format_payback(24), "2 tahun");
/// assert_eq!(format_payback(26), "2 tahun 2 bulan");
/// ```
pub fn format_payback(months: u32) -> String {
    if months < 12 {
        return format!("{} bulan", months);
    }
    let years = months / 12;
    let rest = months % 12;
    if rest == 0 {
        format!("{} tahun", years)
    } else {
        format!("{} tahun {} bulan", years, rest)
    }
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Prints the complete ROI report to stdout.
///
/// The report shows the plot configuration, the baseline and AGROGUARD
/// scenarios side by side, the per-category savings, and the headline ROI
/// and payback figures.
pub fn display_results(result: &RoiResult) {
    println!();
    println!("+================================================================+");
    println!("|               AGROGUARD ROI CALCULATION RESULTS                |");
    println!("+================================================================+");
    println!();

    println!("[PLOT]");
    println!("----------------------------------------------------------------");
    println!("  Kabupaten:        {}", result.kabupaten);
    println!("  Tanaman:          {}", result.plant);
    println!("  Luas Lahan:       {}", format_area(result.land_area_sqm));
    println!("  Irigasi:          {}", result.irrigation);
    println!("  Harga Jual:       {}/kg", format_rupiah(result.price_per_kg));
    println!(
        "  Siklus Panen:     {:.0} hari ({}x per tahun)",
        result.harvest_cycle_days, result.harvest_per_year
    );

    println!();
    println!("[BASELINE - PERTANIAN TRADISIONAL]");
    println!("----------------------------------------------------------------");
    println!(
        "  Produktivitas:    {:.2} kg/m²/tahun",
        result.baseline_productivity
    );
    println!(
        "  Produksi:         {:.0} kg/tahun",
        result.baseline_production_kg
    );
    println!("  Pendapatan:       {}", format_rupiah(result.baseline_revenue));
    println!("  Biaya Air:        {}", format_rupiah(result.baseline_water_cost));
    println!(
        "  Biaya Pupuk:      {}",
        format_rupiah(result.baseline_fertilizer_cost)
    );
    println!(
        "  Biaya Tenaga:     {}",
        format_rupiah(result.baseline_labor_cost)
    );
    println!(
        "  Gagal Panen:      {}",
        format_rupiah(result.baseline_failure_loss)
    );
    println!(
        "  Total Biaya:      {}",
        format_rupiah(result.baseline_total_cost)
    );

    println!();
    println!("[DENGAN AGROGUARD]");
    println!("----------------------------------------------------------------");
    println!(
        "  Produktivitas:    {:.2} kg/m²/tahun (+{})",
        result.agroguard_productivity,
        format_percent(result.productivity_increase_pct)
    );
    println!(
        "  Produksi:         {:.0} kg/tahun",
        result.agroguard_production_kg
    );
    println!(
        "  Pendapatan:       {}",
        format_rupiah(result.agroguard_revenue)
    );
    println!(
        "  Biaya Operasional:{}",
        format_rupiah(result.agroguard_operational_cost)
    );
    println!(
        "  Paket:            {} ({} perangkat)",
        result.package_name, result.device_count
    );
    println!("  Perangkat Keras:  {}", format_rupiah(result.hardware_cost));
    println!(
        "  Langganan/Tahun:  {}",
        format_rupiah(result.annual_subscription)
    );

    println!();
    println!("[PENGHEMATAN PER KATEGORI]");
    println!("----------------------------------------------------------------");
    println!("{:<24} {:>20}", "  Kategori", "Penghematan/Tahun");
    println!("----------------------------------------------------------------");
    println!("{:<24} {:>20}", "  Air", format_rupiah(result.water_savings));
    println!(
        "{:<24} {:>20}",
        "  Pupuk",
        format_rupiah(result.fertilizer_savings)
    );
    println!(
        "{:<24} {:>20}",
        "  Tenaga Kerja",
        format_rupiah(result.labor_savings)
    );
    println!(
        "{:<24} {:>20}",
        "  Gagal Panen",
        format_rupiah(result.failure_savings)
    );
    println!("{:<24} {:>20}", "  Total", format_rupiah(result.total_savings));

    println!();
    println!("[RINGKASAN]");
    println!("----------------------------------------------------------------");
    println!(
        "  Pendapatan Tambahan: {}",
        format_rupiah(result.additional_revenue)
    );
    println!(
        "  Total Manfaat:       {}",
        format_rupiah(result.total_benefit)
    );
    println!(
        "  Total Investasi:     {}",
        format_rupiah(result.total_investment)
    );
    println!("  ROI Tahun Pertama:   {}", format_percent(result.roi_pct));
    println!(
        "  Balik Modal:         {}",
        format_payback(result.payback_months)
    );
    println!();
}
