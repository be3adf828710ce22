//! Label request model
//!
//! The unit of work handed to the renderer by the calling layer. A request
//! is built fresh per print action with already-resolved data (the caller
//! owns REST lookups and pagination) and is consumed exactly once.

use serde::{Deserialize, Serialize};

/// Cargo condition flags that drive the special-indicator overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CargoFlags {
    #[serde(default)]
    pub is_priority: bool,
    #[serde(default)]
    pub requires_special_handling: bool,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub handling_instructions: Option<String>,
}

impl CargoFlags {
    /// True when no indicator would be emitted for these flags.
    pub fn is_empty(&self) -> bool {
        !self.is_priority
            && !self.requires_special_handling
            && self.expiration_date.as_deref().is_none_or(str::is_empty)
            && self.handling_instructions.as_deref().is_none_or(str::is_empty)
    }
}

/// One storage position on a floor label: address plus pallet name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressEntry {
    pub full_address: String,
    pub name: String,
}

/// One storage position on a block label: address plus the floor it sits on.
/// Lists are expected ordered from the highest floor down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockEntry {
    pub full_address: String,
    pub floor_name: String,
}

/// Aggregates printed on a consolidator label. Every field is optional and
/// omitted from the label when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsolidatorSummary {
    #[serde(default)]
    pub cargo_count: Option<u32>,
    #[serde(default)]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub additional_text: Option<String>,
}

/// A renderable label, discriminated by layout kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LabelRequest {
    /// One cargo label: the code as two Code-128 barcodes plus plain text,
    /// with the optional condition-indicator overlay.
    Simple {
        code: String,
        #[serde(default)]
        cargo_flags: Option<CargoFlags>,
    },
    /// A run of consecutive cargo labels, zero-padded from `start_code`.
    BatchRange { start_code: u64, quantity: u32 },
    /// Consolidated-shipment label: QR + aggregates.
    Consolidator {
        code: String,
        #[serde(default)]
        summary: ConsolidatorSummary,
    },
    /// One label per floor, QR grid of up to 8 pallet positions.
    FloorGrid {
        warehouse_code: String,
        warehouse_name: String,
        building_name: String,
        floor_name: String,
        addresses: Vec<AddressEntry>,
    },
    /// One label per pallet position, rotated to read on racked stock.
    SingleVertical {
        full_address: String,
        pallet_name: String,
        building_name: String,
        floor_name: String,
    },
    /// One label per vertical block position: up to 8 addresses, highest
    /// floor first, laid out top-right descending.
    BlockGrid {
        warehouse_code: String,
        warehouse_name: String,
        building_name: String,
        addresses: Vec<BlockEntry>,
    },
}
