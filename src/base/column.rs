/// Columns the input sheet must provide, named by their normalized header.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::AsRefStr,
)]
pub enum Column {
    #[strum(serialize = "item code")]
    ItemCode,
    #[strum(serialize = "barcode")]
    Barcode,
    #[strum(serialize = "item description")]
    Description,
    #[strum(serialize = "qty in stock")]
    QtyInStock,
    #[strum(serialize = "cost usd")]
    CostUsd,
}

/// Columns of the cleaned export, in output order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
pub enum ExportColumn {
    #[strum(serialize = "Item Code Base")]
    ItemCodeBase,
    #[strum(serialize = "BarCode")]
    Barcode,
    #[strum(serialize = "Item Description")]
    Description,
    #[strum(serialize = "Qty (Total)")]
    QtyTotal,
    #[strum(serialize = "Cost (Avg)")]
    CostAvg,
}

/// Normalizes a header cell the same way for every sheet: surrounding
/// whitespace removed, lowercased.
pub fn normalize_header(s: &str) -> String {
    s.trim().to_lowercase()
}
