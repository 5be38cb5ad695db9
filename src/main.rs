use anyhow::{Context, anyhow};
use insureai::config::{config, load_dotenv, startup_log_filter};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    // RUST_LOG wins over INSUREAI_LOG
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = startup_log_filter();
            EnvFilter::try_new(&directives)
                .with_context(|| format!("invalid log filter {directives:?}"))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let dotenv = load_dotenv();
    init_tracing()?;
    match dotenv {
        Some(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        None => tracing::debug!("no .env, using bundled config"),
    }

    // First access builds the config, after the subscriber is installed
    let config = config();
    tracing::info!(reply_delay = ?config.reply_delay, "starting InsureAI");
    dioxus::launch(insureai::ui::App);
    Ok(())
}
