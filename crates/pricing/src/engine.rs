use crate::costs::CostTable;
use crate::error::PricingError;
use crate::report::{CostLine, PricingResult};
use core_types::PricingInput;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use trade_terms::TradeTermRegistry;

/// A stateless calculator that prices a shipment under a trade term.
///
/// The engine only borrows the registry; any number of engines (or threads)
/// can price against the same table at once.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    registry: &'a TradeTermRegistry,
}

impl<'a> PricingEngine<'a> {
    pub fn new(registry: &'a TradeTermRegistry) -> Self {
        Self { registry }
    }

    /// The main entry point for pricing a shipment.
    ///
    /// # Arguments
    ///
    /// * `input` - The shipment and cost data. Numbers are used as given; run
    ///   `PricingInput::validate` at the input boundary first.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PricingResult`, or `InvalidTradeTerm` when the
    /// code is not registered, `DegenerateCostBasis` when there is no cost to
    /// split between the parties and `AmountOverflow` when an amount leaves the
    /// `Decimal` range.
    pub fn calculate(&self, input: &PricingInput) -> Result<PricingResult, PricingError> {
        // --- 1. Resolve the trade term ---
        let definition = self
            .registry
            .lookup(&input.trade_term)
            .ok_or_else(|| PricingError::InvalidTradeTerm(input.trade_term.clone()))?;

        // --- 2. Derive every cost item ---
        let table = CostTable::from_input(input)?;
        let product_cost = table.product_cost();

        // --- 3. Allocate to each side in declared order ---
        let (seller_costs, total_seller_costs) =
            allocate(&table, &definition.seller_cost_items, "Total of seller costs")?;
        let (buyer_costs, total_buyer_costs) =
            allocate(&table, &definition.buyer_cost_items, "Total of buyer costs")?;

        // --- 4. Markup and price ---
        let markup_amount = total_seller_costs
            .checked_mul(input.markup_percentage)
            .and_then(|amount| amount.checked_div(dec!(100)))
            .ok_or(PricingError::AmountOverflow("Markup"))?;
        let total_price = total_seller_costs
            .checked_add(markup_amount)
            .ok_or(PricingError::AmountOverflow("Total price"))?;
        let total_additional_costs = total_seller_costs
            .checked_sub(product_cost)
            .ok_or(PricingError::AmountOverflow("Total of additional costs"))?;

        // --- 5. Responsibility split ---
        let seller_responsibility_percent =
            seller_percent(total_seller_costs, total_buyer_costs)?;

        tracing::debug!(
            trade_term = %definition.code,
            seller = %total_seller_costs,
            buyer = %total_buyer_costs,
            total_price = %total_price,
            "Pricing calculated."
        );

        Ok(PricingResult {
            trade_term: definition.code.clone(),
            trade_term_name: definition.name.clone(),
            risk_transfer_point: definition.risk_transfer_point.clone(),
            explanation: definition.description.clone(),
            product_cost,
            total_additional_costs,
            markup_percentage: input.markup_percentage,
            markup_amount,
            total_price,
            seller_costs,
            buyer_costs,
            total_seller_costs,
            total_buyer_costs,
            seller_responsibility_percent,
            buyer_responsibility_percent: 100 - seller_responsibility_percent,
        })
    }
}

/// Prices each named item and sums them. Duplicates are kept as listed.
fn allocate(
    table: &CostTable,
    items: &[String],
    total_name: &'static str,
) -> Result<(Vec<CostLine>, Decimal), PricingError> {
    let lines: Vec<CostLine> = items
        .iter()
        .map(|name| CostLine {
            item: name.clone(),
            amount: table.amount_for(name),
        })
        .collect();
    let total = lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.amount))
        .ok_or(PricingError::AmountOverflow(total_name))?;
    Ok((lines, total))
}

/// The seller's share of all costs as a whole percentage, rounded half up.
fn seller_percent(seller: Decimal, buyer: Decimal) -> Result<i64, PricingError> {
    let degenerate = || PricingError::DegenerateCostBasis { seller, buyer };

    let total = seller.checked_add(buyer).ok_or_else(degenerate)?;
    if total.is_zero() {
        return Err(degenerate());
    }

    let share = seller
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .and_then(|pct| pct.checked_add(dec!(0.5)))
        .ok_or_else(degenerate)?;

    share.floor().to_i64().ok_or_else(degenerate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_percent_rounds_half_up() {
        assert_eq!(seller_percent(dec!(1), dec!(1)), Ok(50));
        // 1/8 = 12.5% rounds up, 3/8 = 37.5% rounds up.
        assert_eq!(seller_percent(dec!(1), dec!(7)), Ok(13));
        assert_eq!(seller_percent(dec!(3), dec!(5)), Ok(38));
        assert_eq!(seller_percent(dec!(1406), dec!(10)), Ok(99));
        assert_eq!(seller_percent(dec!(1), dec!(0)), Ok(100));
        assert_eq!(seller_percent(dec!(0), dec!(1)), Ok(0));
    }

    #[test]
    fn seller_percent_rejects_zero_total() {
        assert_eq!(
            seller_percent(Decimal::ZERO, Decimal::ZERO),
            Err(PricingError::DegenerateCostBasis {
                seller: Decimal::ZERO,
                buyer: Decimal::ZERO
            })
        );
        assert!(seller_percent(dec!(5), dec!(-5)).is_err());
    }

    #[test]
    fn seller_percent_passes_through_unclamped_shares() {
        // Negative buyer costs push the seller share past 100.
        assert_eq!(seller_percent(dec!(150), dec!(-50)), Ok(150));
    }

    #[test]
    fn allocate_keeps_order_and_duplicates() {
        let table = CostTable::from_input(&PricingInput {
            quantity: 10,
            unit_price: dec!(5),
            ..PricingInput::default()
        })
        .unwrap();
        let items = vec![
            "Packaging".to_string(),
            "Product Cost".to_string(),
            "Packaging".to_string(),
            "Mystery Fee".to_string(),
        ];

        let (lines, total) = allocate(&table, &items, "total").unwrap();

        let names: Vec<&str> = lines.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(names, ["Packaging", "Product Cost", "Packaging", "Mystery Fee"]);
        assert_eq!(lines[3].amount, Decimal::ZERO);
        assert_eq!(total, dec!(52));
    }

    #[test]
    fn allocate_reports_overflowing_total() {
        let table = CostTable::from_input(&PricingInput {
            quantity: 1,
            unit_price: Decimal::MAX,
            ..PricingInput::default()
        })
        .unwrap();
        let items = vec!["Product Cost".to_string(), "Product Cost".to_string()];

        assert_eq!(
            allocate(&table, &items, "Total of seller costs"),
            Err(PricingError::AmountOverflow("Total of seller costs"))
        );
    }
}
