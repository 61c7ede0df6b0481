use anyhow::Context;

use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Loads the configured sheet from `input`, filters it and aggregates the
/// surviving records. Any failure stops the whole run; there is no partial
/// report.
pub fn load_report(
    fs: &base::Fs,
    input: &std::path::Path,
    config: &base::Config,
) -> anyhow::Result<base::Report> {
    let path = fs.resolve(input);
    let sheet = base::Sheet::open(&path, &config.sheet_name, config.skip_rows)
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    let records = base::filter_records(&sheet, &config.item_code_prefixes)
        .with_context(|| format!("invalid inventory in '{}'", path.display()))?;
    Ok(base::Report::from_records(&records))
}
