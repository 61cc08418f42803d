use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "veritas-console",
    version,
    about = "Electoral news verification console"
)]
pub(crate) struct Args {
    /// TOML config with the [service] section
    #[arg(long, default_value = "config/config.toml")]
    pub(crate) config: PathBuf,
    /// Overrides service.base_url from the config
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    #[arg(long, default_value = "logs")]
    pub(crate) log_dir: PathBuf,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
    /// Analyze the given text once, print a plain report, and exit
    #[arg(long)]
    pub(crate) text: Option<String>,
}
