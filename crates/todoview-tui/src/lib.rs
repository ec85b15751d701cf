//! todoview TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod refresh;
pub mod theme;
pub mod widgets;

pub use app::App;

use todoview_core::config::Config;
use todoview_fetch::Fetcher;

/// Start the interactive viewer. Fetches run on `runtime`; the terminal loop
/// stays on the calling thread.
pub fn run(config: Config, runtime: tokio::runtime::Handle) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });
    let fetcher = Fetcher::new(config.source.url(), config.source.timeout())?;
    let refresher = refresh::Refresher::new(runtime, fetcher);
    App::new(config, theme, refresher).run()
}
