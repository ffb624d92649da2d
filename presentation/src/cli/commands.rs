//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for rdw-vehicle-mcp
#[derive(Parser, Debug)]
#[command(name = "rdw-vehicle-mcp")]
#[command(author, version, about = "Dutch vehicle registry (RDW) lookups as callable tools")]
#[command(long_about = r#"
rdw-vehicle-mcp answers questions about Dutch vehicles by kenteken (license
plate), using the RDW open-data API.

By default it runs a tool server speaking line-delimited JSON-RPC 2.0 on
stdin/stdout. Logs always go to stderr.

Configuration files are loaded from (in priority order):
1. RDW_<SECTION>__<KEY>   Environment variables
2. --config <path>        Explicit config file
3. ./rdw.toml             Project-level config
4. ~/.config/rdw-vehicle-mcp/config.toml   Global config

Example:
  rdw-vehicle-mcp serve
  rdw-vehicle-mcp list
  rdw-vehicle-mcp call get_vehicle_info 41-TDK-8
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// What to do once configured
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve tools over stdin/stdout (default)
    Serve,
    /// List the available tools
    List,
    /// Run one tool and print its result
    Call {
        /// Tool name, e.g. get_vehicle_info
        tool: String,
        /// License plate, in any common notation
        kenteken: String,
    },
}

impl Cli {
    /// The requested subcommand, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::try_parse_from(["rdw-vehicle-mcp"]).unwrap();
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_call_subcommand() {
        let cli = Cli::try_parse_from([
            "rdw-vehicle-mcp",
            "-vv",
            "call",
            "get_vehicle_axles",
            "41-TDK-8",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command(),
            Command::Call {
                tool: "get_vehicle_axles".to_string(),
                kenteken: "41-TDK-8".to_string(),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rdw-vehicle-mcp",
            "list",
            "--config",
            "custom.toml",
            "--log-file",
            "/tmp/rdw.log",
        ])
        .unwrap();
        assert_eq!(cli.command(), Command::List);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/rdw.log")));
    }

    #[test]
    fn test_call_requires_kenteken() {
        assert!(Cli::try_parse_from(["rdw-vehicle-mcp", "call", "get_vehicle_info"]).is_err());
    }
}
