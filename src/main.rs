use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vacancy_aggregator::{cli, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load()?;

    let app_state = AppState::new(config)?;

    let mut input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    let keyword = cli::read_keyword(&mut input, &mut out, &config.default_keyword).await?;
    info!(%keyword, max_pages = config.max_pages, "Collecting vacancies");

    let report = app_state
        .aggregator
        .collect_with_progress(&keyword, config.max_pages, |outcome| {
            if let Err(err) = cli::print_page(&mut std::io::stdout(), outcome) {
                warn!(error = %err, "Cannot print progress");
            }
        })
        .await?;
    cli::print_summary(&mut out, &report)?;

    let path = app_state
        .storage
        .save(&keyword, &report.into_vacancies())
        .await?;
    info!(path = %path.display(), "Vacancies stored");

    cli::run_menu(&app_state.storage, &keyword, &mut input, &mut out).await?;
    Ok(())
}

/// Logs go to stderr so they do not interleave with the menu on stdout.
/// `LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
