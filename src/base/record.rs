use crate::base;

/// One inventory line that passed the record filter.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    item_code: base::ItemCode,
    barcode: base::Cell,
    description: String,
    qty_in_stock: f64,
    cost_usd: f64,
}

impl InventoryRecord {
    pub fn new(
        item_code: base::ItemCode,
        barcode: base::Cell,
        description: String,
        qty_in_stock: f64,
        cost_usd: f64,
    ) -> Self {
        Self {
            item_code,
            barcode,
            description,
            qty_in_stock,
            cost_usd,
        }
    }

    pub fn item_code(&self) -> &base::ItemCode {
        &self.item_code
    }

    pub fn barcode(&self) -> &base::Cell {
        &self.barcode
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn qty_in_stock(&self) -> f64 {
        self.qty_in_stock
    }

    pub fn cost_usd(&self) -> f64 {
        self.cost_usd
    }

    pub fn group_key(&self) -> base::GroupKey {
        self.item_code.base()
    }

    /// Bonded stock is tracked under its own description, which should never
    /// become the display name of a group.
    pub fn is_bonded(&self) -> bool {
        self.description.to_lowercase().contains("bonded")
    }
}
