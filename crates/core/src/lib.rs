//! Core conversion logic for Convertly.
//!
//! This crate contains the conversion tables and the exchange rate cache with
//! ZERO web framework dependencies. HTTP handlers live in `convertly-api`.
//!
//! # Modules
//!
//! - `units` - Time, weight and temperature conversion tables
//! - `currency` - Exchange rate provider, matrix and cache
//! - `rounding` - Fixed-precision rounding of results

pub mod currency;
pub mod rounding;
pub mod units;
