use crate::base;
use crate::cli;

/// Inventory cleanup and color-bucket viewer
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(flatten)]
    credentials: cli::sharedopts::CredentialsOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Clean(cli::cmds::clean::Clean),
    View(cli::cmds::view::View),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        match self.command {
            Commands::Init(cmd) => cmd.run(fs),
            Commands::Clean(cmd) => {
                let (session, config) = open_session(&self.credentials, fs)?;
                cmd.run(&session, &config, fs)
            }
            Commands::View(cmd) => {
                let (session, config) = open_session(&self.credentials, fs)?;
                cmd.run(&session, &config, fs)
            }
        }
    }
}

/// Logs in if both credentials were given, and reads the directory's config.
/// Commands decide for themselves whether they need an authenticated session.
fn open_session(
    credentials: &cli::sharedopts::CredentialsOpts,
    fs: &base::Fs,
) -> anyhow::Result<(base::Session, base::Config)> {
    let mut session = base::Session::new();
    if let (Some(username), Some(password)) = (&credentials.username, &credentials.password) {
        session.login(username, password)?;
    }
    let config = fs.read::<base::Config>()?;
    Ok((session, config))
}
