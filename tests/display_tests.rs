//! Tests for display formatting helpers.

use agroguard_roi::display::{format_area, format_payback, format_percent, format_rupiah};

#[test]
fn test_format_rupiah() {
    assert_eq!(format_rupiah(0.0), "Rp 0");
    assert_eq!(format_rupiah(950.0), "Rp 950");
    assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
    assert_eq!(format_rupiah(4_000_000.0), "Rp 4.000.000");
    assert_eq!(format_rupiah(123_456_789.0), "Rp 123.456.789");
}

#[test]
fn test_format_rupiah_rounds_to_whole() {
    assert_eq!(format_rupiah(150_000.5), "Rp 150.001");
    assert_eq!(format_rupiah(150_000.4), "Rp 150.000");
}

#[test]
fn test_format_area() {
    assert_eq!(format_area(1.0), "1 m²");
    assert_eq!(format_area(100.0), "100 m²");
    assert_eq!(format_area(2_500.0), "2.500 m²");
    assert_eq!(format_area(9_999.0), "9.999 m²");
    assert_eq!(format_area(10_000.0), "1,00 ha");
    assert_eq!(format_area(15_000.0), "1,50 ha");
    assert_eq!(format_area(250_000.0), "25,00 ha");
}

#[test]
fn test_format_percent_uses_decimal_comma() {
    assert_eq!(format_percent(50.7), "50,7%");
    assert_eq!(format_percent(40.0), "40,0%");
    assert_eq!(format_percent(7.25), "7,2%");
}

#[test]
fn test_format_payback() {
    assert_eq!(format_payback(1), "1 bulan");
    assert_eq!(format_payback(11), "11 bulan");
    assert_eq!(format_payback(12), "1 tahun");
    assert_eq!(format_payback(14), "1 tahun 2 bulan");
    assert_eq!(format_payback(24), "2 tahun");
    assert_eq!(format_payback(26), "2 tahun 2 bulan");
}
