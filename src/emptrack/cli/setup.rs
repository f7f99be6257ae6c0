use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "emptrack",
    bin_name = "emptrack",
    version = env!("CARGO_PKG_VERSION")
)]
#[command(
    about = "Interactive console for managing employees, roles and departments",
    long_about = "Interactive console for managing employees, roles and departments.\n\n\
                  Connection settings come from config.json in the config directory, \
                  overridden by EMPTRACK_DB_HOST, EMPTRACK_DB_PORT, EMPTRACK_DB_USER, \
                  EMPTRACK_DB_PASSWORD and EMPTRACK_DB_NAME."
)]
pub struct Cli {
    /// Directory holding config.json
    #[arg(long, value_name = "DIR", env = "EMPTRACK_CONFIG_DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
