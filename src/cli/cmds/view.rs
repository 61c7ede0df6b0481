use crate::base;
use crate::cli;

/// View aggregated items grouped by color code
#[derive(clap::Parser)]
pub struct View {
    #[command(flatten)]
    input_opts: cli::sharedopts::InputOpts,

    #[command(flatten)]
    colors_opts: cli::sharedopts::ColorsOpts,

    /// Layout width in columns [default: terminal width]
    #[arg(short, long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// Print color buckets as JSON
    #[arg(long)]
    json: bool,
}

impl View {
    pub fn run(
        self,
        session: &base::Session,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        session.require()?;
        let report = cli::util::load_report(fs, &self.input_opts.input, config)?;
        let mut partition = base::Partition::from(&report);
        partition.retain_colors(&self.colors_opts.colors);

        if self.json {
            return Ok(cli::Output::Str(serde_json::to_string_pretty(&partition)?));
        }
        let term_width = self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0)
                .unwrap_or_default() as usize
        });
        Ok(cli::Output::Buckets(base::bucketview::Config {
            charset: cli::util::charset_from_config(config),
            term_width,
            partition,
        }))
    }
}
