use crate::base;

const DESC_HEADER: &str = "Item Description";
const QTY_HEADER: &str = "Qty (Total)";
const OTHERS_HEADING: &str = "Other Colors (1 item only)";

/// Text rendering of a [`base::Partition`]: multi-row color buckets laid out
/// in two side-by-side lanes, then single-row colors in one table.
#[derive(Debug, PartialEq)]
pub struct View {
    lanes: [Vec<Line>; 2],
    lane_width: usize,
    others: Vec<Line>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub partition: base::Partition,
}

/// A rendered line and its on-screen width, which differs from its length
/// once color escapes are added.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn plain(text: String) -> Self {
        let width = base::util::charlen(&text);
        Self { text, width }
    }

    fn blank() -> Self {
        Self::plain(String::new())
    }
}

impl Config {
    pub fn to_view(&self) -> View {
        let total = self.term_width.max(base::util::MIN_TERM_WIDTH);
        let lane_width = (total - base::util::LANE_GAP) / 2;

        let mut lanes = [Vec::new(), Vec::new()];
        for (lane, buckets) in lanes.iter_mut().zip(self.partition.lanes()) {
            for bucket in buckets {
                if !lane.is_empty() {
                    lane.push(Line::blank());
                }
                lane.push(self.heading(&format!("Color {}", bucket.color_code)));
                lane.extend(self.table(&bucket.rows, lane_width));
            }
        }

        let mut others = Vec::new();
        if !self.partition.others.is_empty() {
            others.push(self.heading(OTHERS_HEADING));
            others.extend(self.table(&self.partition.others, total));
        }

        View {
            lanes,
            lane_width,
            others,
        }
    }

    fn heading(&self, s: &str) -> Line {
        let mut line = Line::plain(s.to_string());
        if self.charset.color {
            line.text = colored::Colorize::bold(s).to_string();
        }
        line
    }

    /// Description and quantity columns filling `width` characters.
    fn table(&self, rows: &[base::ReportRow], width: usize) -> Vec<Line> {
        let qtys = rows
            .iter()
            .map(|r| format!("{:.2}", r.qty_total))
            .collect::<Vec<_>>();
        let qty_width = qtys
            .iter()
            .map(|s| s.len())
            .chain(std::iter::once(QTY_HEADER.len()))
            .max()
            .unwrap_or_default();
        let desc_width = width.saturating_sub(qty_width + 1);
        let ellipsis = self.charset.ellipsis;

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(Line::plain(format!(
            "{:<desc_width$} {:>qty_width$}",
            base::util::truncate(DESC_HEADER, desc_width, ellipsis),
            QTY_HEADER,
        )));
        lines.push(Line::plain(
            self.charset
                .rule
                .to_string()
                .repeat(desc_width + 1 + qty_width),
        ));
        for (r, qty) in rows.iter().zip(qtys) {
            lines.push(Line::plain(format!(
                "{:<desc_width$} {:>qty_width$}",
                base::util::truncate(&r.description, desc_width, ellipsis),
                qty,
            )));
        }
        lines
    }
}

impl std::fmt::Display for View {
    /// Writes a terminating newline. Trailing spaces are trimmed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [left, right] = &self.lanes;
        let height = left.len().max(right.len());
        for i in 0..height {
            let mut s = String::new();
            if let Some(l) = left.get(i) {
                s.push_str(&l.text);
            }
            if let Some(r) = right.get(i) {
                let used = left.get(i).map(|l| l.width).unwrap_or_default();
                let pad = self.lane_width - used.min(self.lane_width) + base::util::LANE_GAP;
                s.push_str(&" ".repeat(pad));
                s.push_str(&r.text);
            }
            writeln!(f, "{}", s.trim_end())?;
        }
        if !self.others.is_empty() {
            if height > 0 {
                writeln!(f)?;
            }
            for line in &self.others {
                writeln!(f, "{}", line.text.trim_end())?;
            }
        }
        Ok(())
    }
}
