//! CLI entrypoint for rdw-vehicle-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use rdw_application::{ToolExecutorPort, VehicleToolDispatcher};
use rdw_domain::ToolCall;
use rdw_domain::tool::catalog::KENTEKEN_PARAM;
use rdw_infrastructure::{ConfigLoader, JsonSchemaToolConverter, RdwHttpFetcher};
use rdw_presentation::{Cli, Command, ConsoleFormatter, ServerInfo, StdioServer};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let lines: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", lines.join("\n"));
    }

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting rdw-vehicle-mcp");

    // === Dependency Injection ===
    let catalog = Arc::new(config.build_catalog()?);
    let fetcher = Arc::new(RdwHttpFetcher::new(config.fetcher_settings()?)?);
    let dispatcher: Arc<dyn ToolExecutorPort> =
        Arc::new(VehicleToolDispatcher::new(fetcher, catalog));

    match cli.command() {
        Command::Serve => serve(dispatcher).await?,
        Command::List => print!("{}", ConsoleFormatter::format_tool_list(dispatcher.tool_spec())),
        Command::Call { tool, kenteken } => {
            return call(dispatcher.as_ref(), &tool, &kenteken).await;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr; stdout carries protocol frames. `RUST_LOG` applies
/// when no `-v` flag is given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Open `path` for appending, creating its directory when missing.
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Cannot open log file {}", path.display()))
}

async fn serve(executor: Arc<dyn ToolExecutorPort>) -> Result<()> {
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    let info = ServerInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let server = StdioServer::new(executor, Arc::new(JsonSchemaToolConverter)).with_info(info);
    server
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), cancel)
        .await?;

    Ok(())
}

async fn call(executor: &dyn ToolExecutorPort, tool: &str, kenteken: &str) -> Result<ExitCode> {
    let param = executor
        .get_tool(tool)
        .map(|t| t.identifier_param.as_str())
        .unwrap_or(KENTEKEN_PARAM);
    let call = ToolCall::new(tool).with_arg(param, kenteken);

    let result = executor.execute(&call).await?;
    print!("{}", ConsoleFormatter::format_result(&result));

    Ok(if result.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("rdw.log");

        assert!(log_file_appender(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_log_file_appender_reports_unusable_directory() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("logs").join("rdw.log");

        let err = log_file_appender(&path).unwrap_err();

        assert!(err.to_string().contains("Cannot open log file"));
    }

    #[test]
    fn test_log_file_appender_requires_file_name() {
        assert!(log_file_appender(Path::new("/")).is_err());
    }
}
