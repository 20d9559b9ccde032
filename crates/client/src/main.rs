//! Terminal client entry point.
mod app;
mod commands;
mod config;
mod content;
mod dirs;
mod input;
mod logging;
mod presentation;

use anyhow::{Context, Result};
use app::App;
use config::ClientConfig;
use content::Content;
use input::StdinCommandProvider;
use presentation::TerminalSink;
use runtime::{FileSaveRepository, Session, StdRngSource};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(logging::generated_session_id);

    let _log_guard = logging::setup_logging(&session_id)?;

    let content = Content::load(&config)?;
    let save_dir = config.save_dir.clone().unwrap_or_else(dirs::save_dir);
    let repo = FileSaveRepository::new(&save_dir)
        .with_context(|| format!("opening save directory {}", save_dir.display()))?;
    tracing::info!(save_dir = %save_dir.display(), "save repository ready");

    let session = Session::new(session_id, content.config.clone());

    let mut app = App::new(
        session,
        content,
        Box::new(repo),
        Box::new(StdinCommandProvider::stdin()),
        Box::new(TerminalSink::new(config.text_delay)),
        Box::new(StdRngSource::from_entropy()),
    );
    app.resume();
    if config.autosave {
        app.session_mut().set_autosave(true);
    }
    app.run().await?;

    tracing::info!(session = app.session().session_id(), "session ended");
    Ok(())
}
