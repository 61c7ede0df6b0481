/// A single spreadsheet value, as read from or written to a worksheet.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parses the cell as a number. Numeric text is accepted after trimming.
    /// Returns `None` for empty cells, for anything non-numeric and for text
    /// spelling a non-finite value ("NaN", "inf").
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Cell::Empty | Cell::Bool(_) => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&calamine::Data> for Cell {
    fn from(value: &calamine::Data) -> Self {
        match value {
            calamine::Data::Empty => Cell::Empty,
            calamine::Data::String(s) => Cell::Text(s.clone()),
            calamine::Data::Float(n) => Cell::Number(*n),
            calamine::Data::Int(n) => Cell::Number(*n as f64),
            calamine::Data::Bool(b) => Cell::Bool(*b),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}
