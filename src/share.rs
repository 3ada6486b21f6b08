//! Shareable-link codec for calculation inputs.
//!
//! The web front-end shares ROI results as
//! `/hasil-roi?k=<kabupaten>&t=<plant>&l=<land area>&i=<irrigation>`.
//! This module encodes the four raw inputs into that query string and
//! decodes it back, validating every field so the caller can show a message
//! naming exactly which parameter is missing or invalid.
//!
//! The codec is stateless: `decode(&encode(..))` reproduces the inputs
//! exactly for every valid combination.

use serde::Serialize;

use crate::error::RoiError;
use crate::models::{IrrigationSystem, PlantType};

/// The four raw inputs a share link carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareParams {
    /// Region name, any non-empty string.
    pub kabupaten: String,
    /// Plant type.
    pub plant: PlantType,
    /// Land area in m², at least 1.
    pub land_area_sqm: f64,
    /// Irrigation tier.
    pub irrigation: IrrigationSystem,
}

/// Encodes the four calculation inputs as a query string.
///
/// Keys are the short forms the front-end uses: `k` (kabupaten), `t`
/// (plant), `l` (land area), `i` (irrigation). Values are percent-escaped.
///
/// # Example
///
/// ```
/// use agroguard_roi::models::{IrrigationSystem, PlantType};
/// use agroguard_roi::share::encode;
///
/// let query = encode("Malang", PlantType::Tomat, 100.0, IrrigationSystem::OtomatisIot);
/// assert_eq!(query, "k=Malang&t=tomat&l=100&i=otomatis-iot");
/// ```
pub fn encode(
    kabupaten: &str,
    plant: PlantType,
    land_area_sqm: f64,
    irrigation: IrrigationSystem,
) -> String {
    format!(
        "k={}&t={}&l={}&i={}",
        encode_component(kabupaten),
        encode_component(plant.as_str()),
        encode_component(&format_area(land_area_sqm)),
        encode_component(irrigation.as_str()),
    )
}

/// Decodes a share-link query string back into calculation inputs.
///
/// Accepts a bare query string, one with a leading `?`, or a full URL (the
/// part after the first `?` is used). Each field is validated separately:
/// a missing key or an empty `k` is [`RoiError::IncompleteShareLink`], an
/// undecodable value is [`RoiError::MalformedShareLink`], and out-of-range
/// values report through the same errors the calculator uses
/// ([`RoiError::UnknownPlantType`], [`RoiError::UnknownIrrigationSystem`],
/// [`RoiError::InvalidLandArea`]).
pub fn decode(query: &str) -> Result<ShareParams, RoiError> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };

    let mut raw_k: Option<&str> = None;
    let mut raw_t: Option<&str> = None;
    let mut raw_l: Option<&str> = None;
    let mut raw_i: Option<&str> = None;

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        match key {
            "k" => raw_k.get_or_insert(value),
            "t" => raw_t.get_or_insert(value),
            "l" => raw_l.get_or_insert(value),
            "i" => raw_i.get_or_insert(value),
            _ => continue,
        };
    }

    let kabupaten = decode_component(
        raw_k.ok_or(RoiError::IncompleteShareLink { param: "k" })?,
        "k",
    )?;
    if kabupaten.trim().is_empty() {
        return Err(RoiError::IncompleteShareLink { param: "k" });
    }
    let plant: PlantType = decode_component(
        raw_t.ok_or(RoiError::IncompleteShareLink { param: "t" })?,
        "t",
    )?
    .parse()?;
    let land_text = decode_component(
        raw_l.ok_or(RoiError::IncompleteShareLink { param: "l" })?,
        "l",
    )?;
    let land_area_sqm = crate::calculator::parse_land_area(&land_text)?;
    let irrigation: IrrigationSystem = decode_component(
        raw_i.ok_or(RoiError::IncompleteShareLink { param: "i" })?,
        "i",
    )?
    .parse()?;

    Ok(ShareParams {
        kabupaten,
        plant,
        land_area_sqm,
        irrigation,
    })
}

/// Formats a land area for the `l` value without losing precision.
///
/// Whole numbers drop the fraction so links stay short; fractional areas use
/// the shortest round-tripping form.
fn format_area(land_area_sqm: f64) -> String {
    if land_area_sqm.fract() == 0.0 && land_area_sqm.abs() < 1e15 {
        format!("{}", land_area_sqm as i64)
    } else {
        format!("{}", land_area_sqm)
    }
}

/// Percent-escapes a query value. Unreserved characters (RFC 3986) pass
/// through, everything else becomes `%XX`.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Reverses [`encode_component`], also accepting `+` for space as browsers
/// emit it. Any malformed escape or non-UTF-8 result reports the offending
/// parameter key.
fn decode_component(value: &str, param: &'static str) -> Result<String, RoiError> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'%' => {
                let hex = value
                    .get(idx + 1..idx + 3)
                    .ok_or(RoiError::MalformedShareLink { param })?;
                let byte = u8::from_str_radix(hex, 16)
                    .map_err(|_| RoiError::MalformedShareLink { param })?;
                out.push(byte);
                idx += 3;
            }
            b'+' => {
                out.push(b' ');
                idx += 1;
            }
            other => {
                out.push(other);
                idx += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| RoiError::MalformedShareLink { param })
}
