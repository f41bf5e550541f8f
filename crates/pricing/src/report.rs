use core_types::Party;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One named cost and what it amounts to on this quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    pub item: String,
    pub amount: Decimal,
}

/// The full price breakdown for one calculation.
///
/// This struct is the final output of the `PricingEngine` and is what the
/// presentation layer renders. It is never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    // I. Trade term
    pub trade_term: String,
    pub trade_term_name: String,
    pub risk_transfer_point: String,
    pub explanation: String,

    // II. Price build-up
    pub product_cost: Decimal,
    /// Seller-side costs beyond the product itself. Negative only for malformed definitions.
    pub total_additional_costs: Decimal,
    pub markup_percentage: Decimal,
    pub markup_amount: Decimal,
    pub total_price: Decimal,

    // III. Cost allocation
    pub seller_costs: Vec<CostLine>,
    pub buyer_costs: Vec<CostLine>,
    pub total_seller_costs: Decimal,
    pub total_buyer_costs: Decimal,
    pub seller_responsibility_percent: i64,
    pub buyer_responsibility_percent: i64,
}

impl PricingResult {
    pub fn cost_lines(&self, party: Party) -> &[CostLine] {
        match party {
            Party::Seller => &self.seller_costs,
            Party::Buyer => &self.buyer_costs,
        }
    }

    pub fn total_costs(&self, party: Party) -> Decimal {
        match party {
            Party::Seller => self.total_seller_costs,
            Party::Buyer => self.total_buyer_costs,
        }
    }

    pub fn responsibility_percent(&self, party: Party) -> i64 {
        match party {
            Party::Seller => self.seller_responsibility_percent,
            Party::Buyer => self.buyer_responsibility_percent,
        }
    }
}
