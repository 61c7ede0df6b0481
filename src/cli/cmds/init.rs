use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a configuration file in the current directory
///
/// Layout options override the stored (or default) values; anything not
/// given is kept.
#[derive(clap::Parser)]
pub struct Init {
    /// Start over from the default configuration
    #[arg(long)]
    reset_config: bool,

    /// Worksheet holding the inventory table
    #[arg(long, value_name = "NAME")]
    sheet_name: Option<String>,

    /// Number of preamble rows above the header row
    #[arg(long, value_name = "N")]
    skip_rows: Option<usize>,

    /// Item code prefixes to keep, separated by commas
    #[arg(long, value_name = "PREFIXES", value_delimiter = ',')]
    prefixes: Option<Vec<String>>,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existed = fs.is_configured();

        let mut config = if existed && !self.reset_config {
            fs.read::<base::Config>()?
        } else {
            initial_config()
        };
        if let Some(sheet_name) = self.sheet_name {
            config.sheet_name = sheet_name;
        }
        if let Some(skip_rows) = self.skip_rows {
            config.skip_rows = skip_rows;
        }
        if let Some(prefixes) = self.prefixes {
            config.item_code_prefixes = prefixes;
        }

        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote configuration");

        let msg = match (existed, self.reset_config) {
            (false, _) => format!("Configuration initialized in '{}'", fs.dir().display()),
            (true, true) => "Configuration reset to defaults.".to_string(),
            (true, false) => format!("Configuration updated in '{}'", fs.dir().display()),
        };
        Ok(cli::Output::Str(msg))
    }
}
