use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven cost components a landed export price is built from.
///
/// Trade-term definitions refer to these by their display name. The variant
/// order is the order the pricing engine derives them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostItem {
    ProductCost,
    Packaging,
    LocalTransport,
    ExportClearance,
    PortLoading,
    OceanAirFreight,
    Insurance,
    ImportDuties,
    DestinationHandling,
    DestinationTransport,
    Unloading,
}

impl CostItem {
    pub const ALL: [CostItem; 11] = [
        CostItem::ProductCost,
        CostItem::Packaging,
        CostItem::LocalTransport,
        CostItem::ExportClearance,
        CostItem::PortLoading,
        CostItem::OceanAirFreight,
        CostItem::Insurance,
        CostItem::ImportDuties,
        CostItem::DestinationHandling,
        CostItem::DestinationTransport,
        CostItem::Unloading,
    ];

    /// The name used in trade-term definitions and shown on quotes.
    pub fn name(&self) -> &'static str {
        match self {
            CostItem::ProductCost => "Product Cost",
            CostItem::Packaging => "Packaging",
            CostItem::LocalTransport => "Local Transport",
            CostItem::ExportClearance => "Export Clearance",
            CostItem::PortLoading => "Port Loading",
            CostItem::OceanAirFreight => "Ocean/Air Freight",
            CostItem::Insurance => "Insurance",
            CostItem::ImportDuties => "Import Duties",
            CostItem::DestinationHandling => "Destination Handling",
            CostItem::DestinationTransport => "Destination Transport",
            CostItem::Unloading => "Unloading",
        }
    }

    /// Exact, case-sensitive reverse of [`CostItem::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.name() == name)
    }
}

impl fmt::Display for CostItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for item in CostItem::ALL {
            assert_eq!(CostItem::from_name(item.name()), Some(item));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(CostItem::from_name("Ocean Freight"), None);
        assert_eq!(CostItem::from_name("insurance"), None);
        assert_eq!(CostItem::from_name("Insurance "), None);
    }
}
