#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub rule: char,
    pub ellipsis: &'static str,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            rule: '-',
            ellipsis: "...",
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            rule: '\u{2500}',
            ellipsis: "\u{2026}",
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
