use strum::IntoEnumIterator;

use crate::base;
use crate::base::ExportColumn;

/// File name offered for the cleaned workbook.
pub const EXPORT_FILENAME: &str = "cleaned_inventory.xlsx";

/// Name of the single worksheet in the cleaned workbook.
pub const EXPORT_SHEET_NAME: &str = "Sheet1";

/// Serializes `report` to an xlsx workbook held in memory: one header row,
/// then one row per report row with values exactly as computed.
pub fn to_xlsx(report: &base::Report) -> Result<Vec<u8>, ExportError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    let bold = rust_xlsxwriter::Format::new().set_bold();
    for (col, column) in ExportColumn::iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, <&str>::from(column), &bold)?;
    }

    for (i, row) in report.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_string(r, 0, row.item_code_base.as_str())?;
        match &row.barcode {
            base::Cell::Empty => {}
            base::Cell::Text(s) => {
                worksheet.write_string(r, 1, s)?;
            }
            base::Cell::Number(n) => {
                worksheet.write_number(r, 1, *n)?;
            }
            base::Cell::Bool(b) => {
                worksheet.write_boolean(r, 1, *b)?;
            }
        }
        worksheet.write_string(r, 2, &row.description)?;
        worksheet.write_number(r, 3, row.qty_total)?;
        worksheet.write_number(r, 4, row.cost_avg)?;
    }

    let buf = workbook.save_to_buffer()?;
    tracing::debug!(rows = report.len(), bytes = buf.len(), "exported report");
    Ok(buf)
}

#[derive(Debug, thiserror::Error)]
#[error("failed to build workbook")]
pub struct ExportError(#[from] rust_xlsxwriter::XlsxError);
