use crate::base;

/// Number of trailing base-code characters that name an item's color.
pub const COLOR_CODE_LEN: usize = 5;

/// One cleaned inventory line per base item.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub item_code_base: base::GroupKey,
    pub barcode: base::Cell,
    pub description: String,
    pub qty_total: f64,
    pub cost_avg: f64,
}

impl ReportRow {
    pub fn new(item_code_base: base::GroupKey, entry: &base::aggregate::Entry) -> Self {
        Self {
            item_code_base,
            barcode: entry.barcode.clone(),
            description: entry.description.clone(),
            qty_total: round2(entry.qty_total),
            cost_avg: round2(entry.cost_avg()),
        }
    }

    /// The last [`COLOR_CODE_LEN`] characters of the base code, or all of it
    /// if shorter.
    pub fn color_code(&self) -> &str {
        let s = self.item_code_base.as_str();
        match s.char_indices().rev().nth(COLOR_CODE_LEN - 1) {
            Some((i, _)) => &s[i..],
            None => s,
        }
    }
}

/// Rounds to two decimal places, ties to even.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Cleaned rows in the order their groups first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Report(Vec<ReportRow>);

impl Report {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportRow> {
        self.0.iter()
    }

    /// Runs the grouping over already-filtered records.
    pub fn from_records(records: &[base::InventoryRecord]) -> Self {
        records.iter().collect::<base::Aggregate>().into_report()
    }
}

impl FromIterator<ReportRow> for Report {
    fn from_iter<T: IntoIterator<Item = ReportRow>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Report {
    type Item = ReportRow;
    type IntoIter = std::vec::IntoIter<ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
