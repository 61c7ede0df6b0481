use crate::base;

/// Running totals for one group of variant records.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub qty_total: f64,
    pub cost_weighted_sum: f64,
    /// Barcode of the first record seen for the group.
    pub barcode: base::Cell,
    /// Empty while every record seen so far is bonded.
    pub description: String,
    pub has_non_bonded_desc: bool,
}

impl Entry {
    fn new(r: &base::InventoryRecord) -> Self {
        let bonded = r.is_bonded();
        Self {
            qty_total: r.qty_in_stock(),
            cost_weighted_sum: r.qty_in_stock() * r.cost_usd(),
            barcode: r.barcode().clone(),
            description: if bonded {
                String::new()
            } else {
                r.description().to_string()
            },
            has_non_bonded_desc: !bonded,
        }
    }

    fn add(&mut self, r: &base::InventoryRecord) {
        self.qty_total += r.qty_in_stock();
        self.cost_weighted_sum += r.qty_in_stock() * r.cost_usd();
        if !self.has_non_bonded_desc && !r.is_bonded() {
            self.description = r.description().to_string();
            self.has_non_bonded_desc = true;
        }
    }

    /// Weighted average unit cost, or 0 for a group with no stock.
    pub fn cost_avg(&self) -> f64 {
        if self.qty_total == 0.0 {
            0.0
        } else {
            self.cost_weighted_sum / self.qty_total
        }
    }
}

/// Accumulates records by group key, remembering the order in which keys
/// first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    index: std::collections::HashMap<base::GroupKey, usize>,
    entries: Vec<(base::GroupKey, Entry)>,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, r: &base::InventoryRecord) {
        let key = r.group_key();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1.add(r),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, Entry::new(r)));
            }
        }
    }

    pub fn get(&self, key: &base::GroupKey) -> Option<&Entry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&base::GroupKey, &Entry)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Finalizes the groups into report rows, keeping first-seen order.
    pub fn into_report(self) -> base::Report {
        tracing::debug!(groups = self.entries.len(), "aggregated inventory");
        self.entries
            .into_iter()
            .map(|(key, entry)| base::ReportRow::new(key, &entry))
            .collect()
    }
}

impl<'a> FromIterator<&'a base::InventoryRecord> for Aggregate {
    fn from_iter<T: IntoIterator<Item = &'a base::InventoryRecord>>(iter: T) -> Self {
        let mut agg = Aggregate::default();
        for r in iter {
            agg.add(r);
        }
        agg
    }
}
