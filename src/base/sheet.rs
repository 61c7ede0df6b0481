use crate::base;

/// A worksheet table: a normalized header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    header: Vec<String>,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based worksheet row number, for error messages.
    pub number: usize,
    /// Exactly one cell per header column.
    pub cells: Vec<base::Cell>,
}

impl Sheet {
    /// Reads the workbook at `path` and loads `sheet_name` from it. See
    /// [`Sheet::from_bytes`].
    pub fn open<P>(path: P, sheet_name: &str, skip_rows: usize) -> Result<Self, LoadError>
    where
        P: AsRef<std::path::Path>,
    {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, sheet_name, skip_rows)
    }

    /// Loads `sheet_name` from an in-memory workbook of any format calamine
    /// understands.
    ///
    /// Worksheet rows `0..skip_rows` are skipped, as are blank rows right
    /// after them; the next row is the header and everything below it is
    /// data. Row numbers are absolute, so a sheet
    /// whose used range starts further down still lines up. If the used range
    /// starts below `skip_rows`, its first row is the header.
    pub fn from_bytes(bytes: &[u8], sheet_name: &str, skip_rows: usize) -> Result<Self, LoadError> {
        let mut workbook = calamine::open_workbook_auto_from_rs(std::io::Cursor::new(bytes))
            .map_err(LoadError::Open)?;
        let available = calamine::Reader::sheet_names(&workbook);
        if !available.iter().any(|s| s == sheet_name) {
            return Err(LoadError::SheetNotFound {
                expected: sheet_name.to_string(),
                available,
            });
        }
        let range = calamine::Reader::worksheet_range(&mut workbook, sheet_name).map_err(|e| {
            LoadError::Read {
                sheet: sheet_name.to_string(),
                source: e,
            }
        })?;
        let sheet = Self::from_range(&range, skip_rows);
        tracing::debug!(
            sheet = sheet_name,
            columns = sheet.header.len(),
            rows = sheet.rows.len(),
            "loaded worksheet"
        );
        Ok(sheet)
    }

    fn from_range(range: &calamine::Range<calamine::Data>, skip_rows: usize) -> Self {
        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or_default();
        let mut rows = range
            .rows()
            .enumerate()
            .map(|(i, cells)| (first_row + i, cells))
            .skip_while(|(n, cells)| *n < skip_rows || is_blank(cells));

        let header = match rows.next() {
            Some((_, cells)) => cells
                .iter()
                .map(|c| base::column::normalize_header(&base::Cell::from(c).to_string()))
                .collect::<Vec<_>>(),
            None => return Self::default(),
        };
        let width = header.len();
        let rows = rows
            .map(|(n, cells)| {
                let mut cells = cells
                    .iter()
                    .take(width)
                    .map(base::Cell::from)
                    .collect::<Vec<_>>();
                cells.resize(width, base::Cell::Empty);
                Row {
                    number: n + 1,
                    cells,
                }
            })
            .collect();
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

fn is_blank(cells: &[calamine::Data]) -> bool {
    cells.iter().all(|c| base::Cell::from(c).is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to open workbook")]
    Open(#[source] calamine::Error),
    #[error("sheet named '{expected}' not found in file (available: {})", .available.join(", "))]
    SheetNotFound {
        expected: String,
        available: Vec<String>,
    },
    #[error("failed to read sheet '{sheet}'")]
    Read {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}
