use strum::IntoEnumIterator;

use crate::base;
use crate::base::Column;

/// Positions of the required columns within a sheet's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    item_code: usize,
    barcode: usize,
    description: usize,
    qty_in_stock: usize,
    cost_usd: usize,
}

impl Columns {
    fn locate(sheet: &base::Sheet) -> Result<Self, ValidationError> {
        let mut found = [0; 5];
        for (i, column) in Column::iter().enumerate() {
            found[i] = sheet
                .column_index(column.as_ref())
                .ok_or(ValidationError::MissingColumn(column))?;
        }
        let [item_code, barcode, description, qty_in_stock, cost_usd] = found;
        Ok(Self {
            item_code,
            barcode,
            description,
            qty_in_stock,
            cost_usd,
        })
    }
}

/// Returns the records of `sheet` whose item code starts with any of
/// `prefixes` and whose description is present, in sheet order.
///
/// Fails before looking at any row if a required column is missing.
/// Quantities and costs are only parsed for rows that are kept.
pub fn filter_records<T>(
    sheet: &base::Sheet,
    prefixes: &[T],
) -> Result<Vec<base::InventoryRecord>, ValidationError>
where
    T: AsRef<str>,
{
    let cols = Columns::locate(sheet)?;
    let mut records = Vec::new();
    for row in sheet.rows() {
        let code = base::ItemCode::from(&row.cells[cols.item_code]);
        if !prefixes.iter().any(|p| code.as_str().starts_with(p.as_ref())) {
            continue;
        }
        let desc = &row.cells[cols.description];
        if desc.is_empty() {
            continue;
        }
        records.push(base::InventoryRecord::new(
            code,
            row.cells[cols.barcode].clone(),
            desc.to_string(),
            number(row, cols.qty_in_stock, Column::QtyInStock)?,
            number(row, cols.cost_usd, Column::CostUsd)?,
        ));
    }
    tracing::info!(
        rows = sheet.rows().len(),
        kept = records.len(),
        "filtered inventory rows"
    );
    Ok(records)
}

fn number(row: &base::sheet::Row, index: usize, column: Column) -> Result<f64, ValidationError> {
    let cell = &row.cells[index];
    if cell.is_empty() {
        tracing::warn!(row = row.number, %column, "empty numeric cell, counting as 0");
        return Ok(0.0);
    }
    cell.to_number().ok_or_else(|| ValidationError::InvalidNumber {
        row: row.number,
        column,
        value: cell.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required column: {0}")]
    MissingColumn(Column),
    #[error("row {row}: '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: Column,
        value: String,
    },
}
