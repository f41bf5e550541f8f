//! # Pricing Engine
//!
//! Turns a shipment's costs and a trade-term code into a landed export price
//! and a seller/buyer cost allocation.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   terminals, files or the network. It depends only on `core-types` and
//!   `trade-terms` (Layer 0).
//! - **Stateless Calculation:** `PricingEngine` borrows an immutable registry and
//!   maps a `PricingInput` to a `PricingResult`. The same input always produces
//!   the same result.
//! - **Exact Arithmetic:** All amounts are `Decimal`, so a quote's total price is
//!   exactly its seller costs plus markup.
//!
//! ## Public API
//!
//! - `PricingEngine`: the calculation entry point.
//! - `PricingResult` / `CostLine`: the price breakdown.
//! - `CostTable`: the eleven derived cost items for a shipment.
//! - `format_currency` / `format_percent`: display helpers for quotes.
//! - `PricingError`: the failures a calculation can report.

// Declare the modules that constitute this crate.
pub mod costs;
pub mod engine;
pub mod error;
pub mod format;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use costs::CostTable;
pub use engine::PricingEngine;
pub use error::PricingError;
pub use format::{format_currency, format_percent};
pub use report::{CostLine, PricingResult};
