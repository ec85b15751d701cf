use clap::Parser;
use std::path::PathBuf;
use todoview::headless::{self, OutputFormat};
use todoview_core::config::Config;

#[derive(Parser)]
#[command(name = "todoview", about = "Terminal viewer for a remote to-do list")]
struct Cli {
    /// Write debug logs to /tmp/todoview-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Server base URL; overrides `[source] base_url`.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds; overrides `[source] timeout_secs`.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Read this config file instead of ~/.config/todoview/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Colour theme (`default`, `gruvbox`).
    #[arg(long)]
    theme: Option<String>,

    /// Fetch once, print the todos to stdout, and exit.
    #[arg(long)]
    headless: bool,

    /// Output format for --headless.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, requires = "headless")]
    format: OutputFormat,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load config file, using defaults");
                Config::defaults()
            }),
        };
        if let Some(url) = &self.base_url {
            config.source.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.source.timeout_secs = secs;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme = theme.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/todoview-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("todoview debug log started — tail -f /tmp/todoview-debug.log");
    }

    let config = cli.config()?;
    tracing::debug!(url = %config.source.url(), headless = cli.headless, "starting");

    let runtime = tokio::runtime::Runtime::new()?;

    if cli.headless {
        let mut stdout = std::io::stdout().lock();
        let count = runtime.block_on(headless::run(&config, cli.format, &mut stdout))?;
        tracing::info!(count, "headless run finished");
        return Ok(());
    }

    todoview_tui::run(config, runtime.handle().clone())
}
