//! Error taxonomy for the ROI engine.
//!
//! Every failure the calculator or the share-link codec can produce is a
//! distinct [`RoiError`] variant, so the calling layer (CLI or web front-end)
//! can show a specific message per failure instead of a generic one. All of
//! these are input errors; correcting the input and retrying always recovers.

use thiserror::Error;

/// All errors the calculation core and the share-link codec can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiError {
    /// Land area text is not a finite number or is below 1 m².
    #[error("luas lahan tidak valid: '{0}' (minimal 1 m²)")]
    InvalidLandArea(String),

    /// Region key is absent from the horticulture productivity table.
    #[error("kabupaten '{0}' tidak ditemukan dalam tabel produktivitas")]
    UnknownRegion(String),

    /// Plant name is outside the supported set, or the table has no row for
    /// this plant in the requested region.
    #[error("jenis tanaman '{0}' tidak dikenal")]
    UnknownPlantType(String),

    /// Irrigation name is outside the supported set.
    #[error("sistem irigasi '{0}' tidak dikenal")]
    UnknownIrrigationSystem(String),

    /// Calculation was invoked before a device recommendation was resolved.
    #[error("rekomendasi perangkat belum tersedia")]
    MissingDeviceRecommendation,

    /// Total benefit or total investment is not positive, so ROI and payback
    /// period are undefined.
    #[error("investasi tidak dapat kembali: total manfaat tidak positif")]
    NonRecoverableInvestment,

    /// A required share-link parameter is missing from the query string.
    #[error("parameter URL tidak lengkap: '{param}' tidak ada")]
    IncompleteShareLink {
        /// Short key of the missing parameter (`k`, `t`, `l` or `i`).
        param: &'static str,
    },

    /// A share-link parameter value could not be percent-decoded.
    #[error("parameter URL rusak: '{param}' tidak dapat dibaca")]
    MalformedShareLink {
        /// Short key of the undecodable parameter.
        param: &'static str,
    },
}
