use crate::error::PricingError;
use core_types::{PricingInput, ShipmentCosts};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use trade_terms::CostItem;

/// Every derived cost item for one shipment, keyed by cost item.
///
/// Names that are not one of the eleven recognized items resolve to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    amounts: HashMap<CostItem, Decimal>,
}

impl CostTable {
    /// Derives all eleven cost items from a request.
    ///
    /// Fails with `AmountOverflow` when an item does not fit in a `Decimal`.
    pub fn from_input(input: &PricingInput) -> Result<Self, PricingError> {
        let product_cost = Decimal::from(input.quantity)
            .checked_mul(input.unit_price)
            .ok_or(PricingError::AmountOverflow("Product cost"))?;
        Self::derive(product_cost, &input.costs)
    }

    fn derive(product_cost: Decimal, costs: &ShipmentCosts) -> Result<Self, PricingError> {
        let amounts: HashMap<CostItem, Decimal> = CostItem::ALL
            .into_iter()
            .map(|item| {
                let amount = match item {
                    CostItem::ProductCost => Some(product_cost),
                    CostItem::Packaging => product_cost.checked_mul(dec!(0.02)),
                    CostItem::LocalTransport => Some(costs.local_transport),
                    CostItem::ExportClearance => Some(costs.customs_clearance),
                    CostItem::PortLoading => costs.inland_freight.checked_mul(dec!(0.1)),
                    CostItem::OceanAirFreight => Some(costs.ocean_air_freight),
                    CostItem::Insurance => Some(costs.insurance),
                    // Fed by the export-duties field; the quote labels it as import duties.
                    CostItem::ImportDuties => Some(costs.export_duties),
                    CostItem::DestinationHandling => {
                        costs.ocean_air_freight.checked_mul(dec!(0.05))
                    }
                    CostItem::DestinationTransport => {
                        costs.local_transport.checked_mul(dec!(1.2))
                    }
                    CostItem::Unloading => costs.inland_freight.checked_mul(dec!(0.05)),
                };
                amount
                    .map(|amount| (item, amount))
                    .ok_or(PricingError::AmountOverflow(item.name()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { amounts })
    }

    pub fn get(&self, item: CostItem) -> Decimal {
        self.amounts.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Looks up a cost item by its display name, defaulting to zero for unknown names.
    pub fn amount_for(&self, name: &str) -> Decimal {
        match CostItem::from_name(name) {
            Some(item) => self.get(item),
            None => {
                tracing::trace!(cost_item = name, "Unrecognized cost item priced at zero.");
                Decimal::ZERO
            }
        }
    }

    pub fn product_cost(&self) -> Decimal {
        self.get(CostItem::ProductCost)
    }
}
