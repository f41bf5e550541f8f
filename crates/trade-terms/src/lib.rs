//! # Trade-Term Registry
//!
//! Fixed reference data for the seven supported Incoterms: which named cost
//! items the seller bears, which the buyer bears, and where risk passes.
//!
//! ## Architectural Principles
//!
//! - **Layer 0 Data:** No calculations live here. The pricing engine reads this
//!   table; it never writes to it.
//! - **Built Once:** A `TradeTermRegistry` is an immutable value constructed at
//!   startup and passed by reference, not a global.
//!
//! ## Public API
//!
//! - `TradeTermRegistry`: lookup by code and ordered enumeration.
//! - `TradeTermDefinition`: one term's cost split and risk-transfer text.
//! - `CostItem`: the eleven recognized cost-item names.

pub mod cost_item;
pub mod registry;

pub use cost_item::CostItem;
pub use registry::{TradeTermDefinition, TradeTermRegistry, TradeTermSummary};
