#[derive(clap::Args)]
pub struct CredentialsOpts {
    /// Username for the inventory tools
    #[arg(long, global = true, env = "INVCLEAN_USERNAME")]
    pub username: Option<String>,

    /// Password for the inventory tools
    #[arg(long, global = true, env = "INVCLEAN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(clap::Args)]
pub struct InputOpts {
    /// Inventory workbook to read (xlsx, xls, xlsb or ods)
    pub input: std::path::PathBuf,
}

#[derive(clap::Args)]
pub struct ColorsOpts {
    /// Wildcard patterns to match color codes of interest
    ///
    /// Use commas to separate multiple patterns. A color code is shown if it
    /// matches any pattern. Color codes are the last 5 characters of an
    /// item's base code.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub colors: Vec<String>,
}
