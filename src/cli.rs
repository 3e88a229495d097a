//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CollectorConfig;
use crate::error::Result;

/// Collect metadata (title, creator, creation time, members) for every
/// group the account belongs to.
#[derive(Parser, Debug, Clone)]
#[command(name = "groupmeta")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    groupmeta --snapshot account.json
    groupmeta --snapshot account.json -o /data --group_blacklist Family 5511-1600000000
    groupmeta --snapshot account.json -j config.json
    groupmeta --snapshot account.json --json_string '{\"group_blacklist\": [\"Work\"]}'")]
pub struct Args {
    /// Account snapshot to collect from
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Group titles or ids (without @suffix) to skip
    #[arg(long = "group_blacklist", alias = "group-blacklist", num_args = 1.., value_name = "ID")]
    pub group_blacklist: Vec<String>,

    /// JSON config file; its keys override command-line values
    #[arg(short = 'j', long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Inline JSON config; ignored when --json is given
    #[arg(long = "json_string", alias = "json-string", value_name = "JSON")]
    pub json_string: Option<String>,

    /// Directory for group files and the daily aggregate
    #[arg(short, long, value_name = "DIR", default_value = crate::config::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Session profile directory (default: <output-dir>/profile)
    #[arg(long, value_name = "DIR")]
    pub profile_dir: Option<PathBuf>,

    /// Error log (default: <output-dir>/log_grupos.txt)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Configuration from the command line alone.
    pub fn base_config(&self) -> CollectorConfig {
        let mut config = CollectorConfig::new()
            .with_blacklist(self.group_blacklist.iter().cloned())
            .with_output_dir(&self.output_dir);
        if let Some(profile_dir) = &self.profile_dir {
            config = config.with_profile_dir(profile_dir);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file);
        }
        config
    }

    /// Command-line configuration with JSON overrides applied.
    pub fn to_config(&self) -> Result<CollectorConfig> {
        self.base_config()
            .merge_overrides(self.json.as_deref(), self.json_string.as_deref())
    }
}
