use crate::cost_item::CostItem;
use core_types::Party;
use serde::{Deserialize, Serialize};

/// How one trade term splits cost responsibility between seller and buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTermDefinition {
    pub code: String,
    pub name: String,
    /// Shown to the user verbatim as the explanation of a quote.
    pub description: String,
    /// Cost-item names borne by the seller, in display order.
    pub seller_cost_items: Vec<String>,
    /// Cost-item names borne by the buyer, in display order.
    pub buyer_cost_items: Vec<String>,
    pub risk_transfer_point: String,
    /// Nominal seller share for reference only. Quotes recompute the split from costs.
    pub reference_seller_percent: u8,
}

impl TradeTermDefinition {
    /// The cost-item names assigned to `party`.
    pub fn cost_items(&self, party: Party) -> &[String] {
        match party {
            Party::Seller => &self.seller_cost_items,
            Party::Buyer => &self.buyer_cost_items,
        }
    }
}

/// The code and name of a term, as listed in a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTermSummary {
    pub code: String,
    pub name: String,
}

/// An immutable, ordered table of trade-term definitions.
///
/// Build it once (usually with [`TradeTermRegistry::standard`]) and hand out
/// references. It is never mutated after construction, so it can be shared
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTermRegistry {
    definitions: Vec<TradeTermDefinition>,
}

impl TradeTermRegistry {
    /// Builds a registry from caller-supplied definitions, keeping their order.
    ///
    /// When two definitions share a code, lookups resolve to the first one.
    pub fn from_definitions(definitions: Vec<TradeTermDefinition>) -> Self {
        tracing::debug!(count = definitions.len(), "Trade-term registry built.");
        Self { definitions }
    }

    /// The seven Incoterms 2020 terms this calculator supports.
    pub fn standard() -> Self {
        Self::from_definitions(standard_definitions())
    }

    /// Exact-match lookup. Codes are case-sensitive and are not trimmed.
    pub fn lookup(&self, code: &str) -> Option<&TradeTermDefinition> {
        self.definitions.iter().find(|d| d.code == code)
    }

    /// All definitions in registration order.
    pub fn list_all(&self) -> &[TradeTermDefinition] {
        &self.definitions
    }

    pub fn summaries(&self) -> Vec<TradeTermSummary> {
        self.definitions
            .iter()
            .map(|d| TradeTermSummary {
                code: d.code.clone(),
                name: d.name.clone(),
            })
            .collect()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.code.as_str())
    }
}

impl Default for TradeTermRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shorthand for building the built-in table.
fn term(
    code: &str,
    name: &str,
    description: &str,
    seller: &[CostItem],
    buyer: &[CostItem],
    risk_transfer_point: &str,
    reference_seller_percent: u8,
) -> TradeTermDefinition {
    let names = |items: &[CostItem]| items.iter().map(|i| i.name().to_string()).collect();
    TradeTermDefinition {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        seller_cost_items: names(seller),
        buyer_cost_items: names(buyer),
        risk_transfer_point: risk_transfer_point.to_string(),
        reference_seller_percent,
    }
}

fn standard_definitions() -> Vec<TradeTermDefinition> {
    use CostItem::*;

    vec![
        term(
            "EXW",
            "Ex Works",
            "The seller makes goods available at their premises. The buyer bears all costs and risks from that point.",
            &[ProductCost, Packaging],
            &[
                LocalTransport,
                ExportClearance,
                OceanAirFreight,
                Insurance,
                ImportDuties,
                DestinationHandling,
            ],
            "Seller's premises",
            15,
        ),
        term(
            "FCA",
            "Free Carrier",
            "The seller delivers goods to a carrier nominated by the buyer at a named place.",
            &[ProductCost, Packaging, LocalTransport, ExportClearance],
            &[OceanAirFreight, Insurance, ImportDuties, DestinationHandling],
            "Named carrier location",
            25,
        ),
        term(
            "FOB",
            "Free on Board",
            "The seller delivers goods on board the vessel. Risk transfers when goods pass the ship's rail.",
            &[ProductCost, Packaging, LocalTransport, ExportClearance, PortLoading],
            &[OceanAirFreight, Insurance, ImportDuties, DestinationHandling],
            "Port of shipment (on board vessel)",
            35,
        ),
        term(
            "CFR",
            "Cost and Freight",
            "The seller pays freight costs to the destination port but risk transfers at the port of shipment.",
            &[
                ProductCost,
                Packaging,
                LocalTransport,
                ExportClearance,
                PortLoading,
                OceanAirFreight,
            ],
            &[Insurance, ImportDuties, DestinationHandling],
            "Port of shipment (risk), Port of destination (cost)",
            60,
        ),
        term(
            "CIF",
            "Cost, Insurance and Freight",
            "The seller pays for freight and insurance to the destination port. Risk transfers at port of shipment.",
            &[
                ProductCost,
                Packaging,
                LocalTransport,
                ExportClearance,
                PortLoading,
                OceanAirFreight,
                Insurance,
            ],
            &[ImportDuties, DestinationHandling],
            "Port of shipment (risk), Port of destination (cost)",
            70,
        ),
        term(
            "DAP",
            "Delivered at Place",
            "The seller delivers goods ready for unloading at the named destination.",
            &[
                ProductCost,
                Packaging,
                LocalTransport,
                ExportClearance,
                OceanAirFreight,
                Insurance,
                DestinationTransport,
            ],
            &[ImportDuties, Unloading],
            "Named place of destination",
            85,
        ),
        term(
            "DDP",
            "Delivered Duty Paid",
            "The seller bears all costs and risks until goods are delivered to the buyer, including import duties.",
            &[
                ProductCost,
                Packaging,
                LocalTransport,
                ExportClearance,
                OceanAirFreight,
                Insurance,
                ImportDuties,
                DestinationTransport,
            ],
            &[Unloading],
            "Final destination",
            95,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_lists_terms_in_order() {
        let registry = TradeTermRegistry::standard();
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, ["EXW", "FCA", "FOB", "CFR", "CIF", "DAP", "DDP"]);
        // Stable across calls.
        assert_eq!(registry.list_all(), registry.list_all());
    }

    #[test]
    fn lookup_is_exact_match() {
        let registry = TradeTermRegistry::standard();
        assert_eq!(
            registry.lookup("CIF").map(|d| d.name.as_str()),
            Some("Cost, Insurance and Freight")
        );
        assert!(registry.lookup("cif").is_none());
        assert!(registry.lookup(" CIF").is_none());
        assert!(registry.lookup("CIF ").is_none());
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("XXX").is_none());
    }

    #[test]
    fn every_standard_cost_item_is_recognized() {
        let registry = TradeTermRegistry::standard();
        for definition in registry.list_all() {
            for party in [Party::Seller, Party::Buyer] {
                for name in definition.cost_items(party) {
                    assert!(
                        CostItem::from_name(name).is_some(),
                        "{} lists unknown cost item '{}'",
                        definition.code,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn standard_terms_never_assign_an_item_to_both_sides() {
        let registry = TradeTermRegistry::standard();
        for definition in registry.list_all() {
            for name in &definition.seller_cost_items {
                assert!(
                    !definition.buyer_cost_items.contains(name),
                    "{}: {}",
                    definition.code,
                    name
                );
            }
        }
    }

    #[test]
    fn reference_percent_grows_with_seller_obligation() {
        let registry = TradeTermRegistry::standard();
        let percents: Vec<u8> = registry
            .list_all()
            .iter()
            .map(|d| d.reference_seller_percent)
            .collect();
        assert_eq!(percents, [15, 25, 35, 60, 70, 85, 95]);
    }

    #[test]
    fn summaries_carry_code_and_name() {
        let summaries = TradeTermRegistry::standard().summaries();
        assert_eq!(summaries.len(), 7);
        assert_eq!(
            summaries[0],
            TradeTermSummary {
                code: "EXW".to_string(),
                name: "Ex Works".to_string()
            }
        );
    }

    #[test]
    fn custom_registry_resolves_first_duplicate() {
        let mut first = TradeTermRegistry::standard().list_all()[0].clone();
        first.name = "First".to_string();
        let mut second = first.clone();
        second.name = "Second".to_string();

        let registry = TradeTermRegistry::from_definitions(vec![first, second]);
        assert_eq!(registry.lookup("EXW").map(|d| d.name.as_str()), Some("First"));
    }

    #[test]
    fn definitions_serialize_for_listing() {
        let registry = TradeTermRegistry::standard();
        let json = serde_json::to_value(registry.lookup("DDP").unwrap()).unwrap();
        assert_eq!(json["risk_transfer_point"], "Final destination");
        assert_eq!(json["buyer_cost_items"][0], "Unloading");
    }
}
