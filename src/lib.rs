//! # AGROGUARD ROI Engine
//!
//! A command-line tool and library that computes the return on investment of
//! switching a horticulture plot to AGROGUARD IoT monitoring.
//!
//! The calculation compares traditional farming against AGROGUARD-assisted
//! farming for a single plot, based on:
//!
//! - The horticulture productivity table (baseline yield, price, and cost
//!   figures per kabupaten and plant type)
//! - The land area and irrigation tier of the plot
//! - The recommended device package for the plot size
//!
//! ## Modules
//!
//! - [`models`] - Core data structures: enums, table rows, and the result
//! - [`error`] - The closed [`error::RoiError`] taxonomy
//! - [`data`] - CSV data loading functionality
//! - [`calculator`] - The pure ROI calculation and recommendation lookup
//! - [`share`] - Shareable-link query codec
//! - [`display`] - Output formatting and report rendering
//!
//! ## Example Usage
//!
//! ```no_run
//! use agroguard_roi::{
//!     calculator::{calculate, recommend_device},
//!     data::load_all_data,
//!     display::display_results,
//!     models::{IrrigationSystem, PlantType},
//! };
//! use std::path::Path;
//!
//! // Load the productivity and package tables
//! let dataset = load_all_data(Path::new("data")).unwrap();
//!
//! // Resolve a device package for a 100 m² plot
//! let device = recommend_device(&dataset.packages, 100.0).unwrap();
//!
//! // Run the comparison
//! let result = calculate(
//!     "Malang",
//!     PlantType::Tomat,
//!     "100",
//!     IrrigationSystem::OtomatisIot,
//!     &dataset.horticulture,
//!     Some(&device),
//! )
//! .unwrap();
//!
//! display_results(&result);
//! ```
//!
//! ## Guarantees
//!
//! The calculation is a pure function: it touches no shared state, performs
//! no I/O, and produces bit-identical results for identical inputs. Every
//! invalid input is rejected with a specific [`error::RoiError`] variant;
//! nothing falls back to a silent default, and ROI and payback are guarded
//! against a non-positive benefit or investment.

pub mod calculator;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod share;
pub mod wasm;
