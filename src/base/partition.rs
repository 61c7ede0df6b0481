use crate::base;

/// Report rows sharing a color code.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorBucket {
    pub color_code: String,
    pub rows: Vec<base::ReportRow>,
}

/// Report rows bucketed by color code for display.
///
/// `buckets` holds every color with at least two rows, sorted by color code.
/// Colors with a single row are collected, in the same sorted order, into
/// `others`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Partition {
    pub buckets: Vec<ColorBucket>,
    pub others: Vec<base::ReportRow>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty() && self.others.is_empty()
    }

    /// Splits buckets into two display lanes, alternating in bucket order.
    pub fn lanes(&self) -> [Vec<&ColorBucket>; 2] {
        let mut lanes = [Vec::new(), Vec::new()];
        for (i, bucket) in self.buckets.iter().enumerate() {
            lanes[i % 2].push(bucket);
        }
        lanes
    }

    /// Keeps only buckets and others whose color code matches any of the
    /// wildcard `patterns`.
    pub fn retain_colors<T>(&mut self, patterns: &[T])
    where
        T: AsRef<str>,
    {
        let patterns = patterns
            .iter()
            .map(|p| wildmatch::WildMatch::new(p.as_ref()))
            .collect::<Vec<_>>();
        let matches = |code: &str| patterns.iter().any(|p| p.matches(code));
        self.buckets.retain(|b| matches(&b.color_code));
        self.others.retain(|r| matches(r.color_code()));
    }
}

impl From<&base::Report> for Partition {
    fn from(report: &base::Report) -> Self {
        let mut groups = std::collections::BTreeMap::<&str, Vec<base::ReportRow>>::new();
        for row in report.iter() {
            groups.entry(row.color_code()).or_default().push(row.clone());
        }
        let mut partition = Partition::default();
        for (color_code, rows) in groups {
            if rows.len() == 1 {
                partition.others.extend(rows);
            } else {
                partition.buckets.push(ColorBucket {
                    color_code: color_code.to_string(),
                    rows,
                });
            }
        }
        partition
    }
}
