use anyhow::Context;

use crate::base;
use crate::cli;

/// Aggregate variant rows and write the cleaned workbook
#[derive(clap::Parser)]
pub struct Clean {
    #[command(flatten)]
    input_opts: cli::sharedopts::InputOpts,

    /// Where to write the cleaned workbook [default: ./cleaned_inventory.xlsx]
    #[arg(short, long, value_name = "PATH")]
    output: Option<std::path::PathBuf>,
}

impl Clean {
    pub fn run(
        self,
        session: &base::Session,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        session.require()?;
        let report = cli::util::load_report(fs, &self.input_opts.input, config)?;
        let bytes = base::export::to_xlsx(&report)?;

        let path = fs.resolve(
            self.output
                .unwrap_or_else(|| base::export::EXPORT_FILENAME.into()),
        );
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), items = report.len(), "wrote cleaned workbook");

        Ok(cli::Output::Str(format!(
            "Cleanup complete: {} item{} written to '{}'",
            report.len(),
            if report.len() == 1 { "" } else { "s" },
            path.display()
        )))
    }
}
