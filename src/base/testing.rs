use crate::base;

/// Builds small in-memory workbooks shaped like inventory exports.
pub struct Workbook {
    sheet_name: String,
    cells: Vec<(u32, Vec<base::Cell>)>,
    next_row: u32,
}

impl Workbook {
    pub fn new() -> Self {
        Self {
            sheet_name: "Sheet".to_string(),
            cells: Vec::new(),
            next_row: 0,
        }
    }

    pub fn sheet_name(mut self, name: &str) -> Self {
        self.sheet_name = name.to_string();
        self
    }

    /// Occupies `n` rows. `title` goes in the first one, unless empty, in
    /// which case the rows are left blank.
    pub fn preamble(mut self, title: &str, n: u32) -> Self {
        if !title.is_empty() && n > 0 {
            self.cells.push((self.next_row, vec![title.into()]));
        }
        self.next_row += n;
        self
    }

    pub fn header(self, names: &[&str]) -> Self {
        let cells = names.iter().map(|&s| s.into()).collect::<Vec<_>>();
        self.row(&cells)
    }

    pub fn row(mut self, cells: &[base::Cell]) -> Self {
        self.cells.push((self.next_row, cells.to_vec()));
        self.next_row += 1;
        self
    }

    /// Header row with the standard required columns.
    pub fn inventory_header(self) -> Self {
        self.header(&["Item Code", "Barcode", "Item Description", "Qty In Stock", "Cost USD"])
    }

    /// Row in the column order of [`Workbook::inventory_header`]. A `None`
    /// description leaves the cell blank.
    pub fn item(self, code: &str, barcode: f64, desc: Option<&str>, qty: f64, cost: f64) -> Self {
        let desc = desc.map(base::Cell::from).unwrap_or_default();
        self.row(&[code.into(), barcode.into(), desc, qty.into(), cost.into()])
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name).unwrap();
        for (row, cells) in &self.cells {
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    base::Cell::Empty => {}
                    base::Cell::Text(s) => {
                        worksheet.write_string(*row, col, s).unwrap();
                    }
                    base::Cell::Number(n) => {
                        worksheet.write_number(*row, col, *n).unwrap();
                    }
                    base::Cell::Bool(b) => {
                        worksheet.write_boolean(*row, col, *b).unwrap();
                    }
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    pub fn save<P>(&self, path: P)
    where
        P: AsRef<std::path::Path>,
    {
        std::fs::write(path, self.to_bytes()).unwrap()
    }
}

/// A typical upload: 14 preamble rows, the required header, then `rows`.
pub fn inventory(rows: &[(&str, f64, Option<&str>, f64, f64)]) -> Workbook {
    rows.iter().fold(
        Workbook::new()
            .preamble("Inventory valuation report", 14)
            .inventory_header(),
        |wb, &(code, barcode, desc, qty, cost)| wb.item(code, barcode, desc, qty, cost),
    )
}

/// Parses a workbook written by [`base::export::to_xlsx`] back into a report.
pub fn read_export(bytes: &[u8]) -> base::Report {
    let sheet = base::Sheet::from_bytes(bytes, base::export::EXPORT_SHEET_NAME, 0).unwrap();
    sheet
        .rows()
        .iter()
        .map(|row| base::ReportRow {
            item_code_base: row.cells[0].to_string().as_str().into(),
            barcode: row.cells[1].clone(),
            description: row.cells[2].to_string(),
            qty_total: row.cells[3].to_number().unwrap(),
            cost_avg: row.cells[4].to_number().unwrap(),
        })
        .collect()
}
