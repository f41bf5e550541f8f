use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use core_types::{Currency, Party};
use pricing::{PricingResult, format_currency, format_percent};
use std::fmt;
use trade_terms::TradeTermDefinition;

/// The line printed under every quote.
pub const ESTIMATE_NOTICE: &str =
    "Estimate only. Not tax or legal advice; confirm duties and freight with your forwarder.";

pub const COMING_SOON_NOTICE: &str =
    "Coming soon: an assistant to help you pick the most cost-effective Incoterm based on product and buyer geography.";

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// The trade-term selection list.
pub fn terms_table(definitions: &[TradeTermDefinition]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Code", "Name", "Risk Transfer Point", "Ref. Seller %"]);
    for d in definitions {
        table.add_row(vec![
            Cell::new(&d.code).add_attribute(Attribute::Bold),
            Cell::new(&d.name),
            Cell::new(&d.risk_transfer_point),
            amount_cell(format!("{}%", d.reference_seller_percent)),
        ]);
    }
    table
}

fn seller_table(result: &PricingResult, currency: Currency) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Seller Costs & Responsibilities", "Amount"]);
    for line in result.cost_lines(Party::Seller) {
        table.add_row(vec![
            Cell::new(&line.item),
            amount_cell(format_currency(line.amount, currency)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Subtotal").add_attribute(Attribute::Bold),
        amount_cell(format_currency(result.total_costs(Party::Seller), currency)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Markup ({})", format_percent(result.markup_percentage))),
        amount_cell(format!("+{}", format_currency(result.markup_amount, currency))),
    ]);
    table.add_row(vec![
        Cell::new("Total Price to Buyer").add_attribute(Attribute::Bold),
        amount_cell(format_currency(result.total_price, currency)).add_attribute(Attribute::Bold),
    ]);
    table
}

fn buyer_table(result: &PricingResult, currency: Currency) -> Option<Table> {
    let lines = result.cost_lines(Party::Buyer);
    if lines.is_empty() {
        return None;
    }
    let mut table = new_table();
    table.set_header(vec!["Buyer Costs & Responsibilities", "Amount"]);
    for line in lines {
        table.add_row(vec![
            Cell::new(&line.item),
            amount_cell(format_currency(line.amount, currency)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total Additional Costs").add_attribute(Attribute::Bold),
        amount_cell(format_currency(result.total_costs(Party::Buyer), currency)),
    ]);
    Some(table)
}

/// The full price breakdown for the terminal, in a given display currency.
pub struct QuoteView<'a> {
    pub result: &'a PricingResult,
    pub currency: Currency,
}

impl fmt::Display for QuoteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (result, currency) = (self.result, self.currency);

        writeln!(f, "{} - {}", result.trade_term, result.trade_term_name)?;
        writeln!(
            f,
            "Total Price: {}   Seller Responsibility: {}%   Buyer Responsibility: {}%",
            format_currency(result.total_price, currency),
            result.responsibility_percent(Party::Seller),
            result.responsibility_percent(Party::Buyer),
        )?;
        writeln!(f, "Risk Transfer Point: {}", result.risk_transfer_point)?;
        writeln!(f, "{}", result.explanation)?;
        writeln!(f)?;

        writeln!(f, "{}", seller_table(result, currency))?;
        writeln!(f)?;

        match buyer_table(result, currency) {
            Some(table) => writeln!(f, "{}", table)?,
            None => {
                writeln!(f, "No additional costs for buyer")?;
                writeln!(f, "All costs included in the selling price")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "{}", ESTIMATE_NOTICE)?;
        write!(f, "{}", COMING_SOON_NOTICE)
    }
}

pub fn render_quote(result: &PricingResult, currency: Currency) -> String {
    QuoteView { result, currency }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{PricingInput, ShipmentCosts};
    use pricing::{CostLine, PricingEngine};
    use rust_decimal_macros::dec;
    use trade_terms::TradeTermRegistry;

    fn cif_quote() -> PricingResult {
        let registry = TradeTermRegistry::standard();
        let input = PricingInput {
            quantity: 100,
            unit_price: dec!(10),
            trade_term: "CIF".to_string(),
            costs: ShipmentCosts {
                local_transport: dec!(100),
                inland_freight: dec!(60),
                ocean_air_freight: dec!(200),
                insurance: dec!(50),
                customs_clearance: dec!(30),
                export_duties: dec!(0),
            },
            ..PricingInput::default()
        };
        PricingEngine::new(&registry).calculate(&input).unwrap()
    }

    #[test]
    fn quote_shows_summary_and_both_sides() {
        let text = render_quote(&cif_quote(), Currency::Usd);

        assert!(text.starts_with("CIF - Cost, Insurance and Freight\n"));
        assert!(text.contains("Total Price: $1,546.60"));
        assert!(text.contains("Seller Responsibility: 99%"));
        assert!(text.contains("Buyer Responsibility: 1%"));
        assert!(text.contains("Port of shipment (risk), Port of destination (cost)"));
        assert!(text.contains("Markup (10.0%)"));
        assert!(text.contains("+$140.60"));
        assert!(text.contains("$1,406.00"));
        assert!(text.contains("Destination Handling"));
        assert!(text.contains("Total Additional Costs"));
        assert!(text.contains(ESTIMATE_NOTICE));
    }

    #[test]
    fn inr_changes_only_the_symbol() {
        let text = render_quote(&cif_quote(), Currency::Inr);
        assert!(text.contains("Total Price: ₹1,546.60"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn empty_buyer_side_says_so() {
        let mut quote = cif_quote();
        quote.buyer_costs = Vec::<CostLine>::new();
        let text = render_quote(&quote, Currency::Usd);
        assert!(text.contains("No additional costs for buyer"));
        assert!(!text.contains("Total Additional Costs"));
    }

    #[test]
    fn terms_table_lists_every_code() {
        let registry = TradeTermRegistry::standard();
        let text = terms_table(registry.list_all()).to_string();
        for code in registry.codes() {
            assert!(text.contains(code));
        }
        assert!(text.contains("Delivered Duty Paid"));
    }
}
