use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::LevelFilter;

use cultivar_classifiers::artifact::{load_artifact, ArtifactBundle, DEFAULT_ARTIFACT_PATH};
use cultivar_classifiers::handler::RequestHandler;
use cultivar_cli::cli::cli;
use cultivar_cli::predict::batch::run_predict;
use cultivar_cli::predict::inspect::write_summary;
use cultivar_cli::serve::input::ServerConfig;
use cultivar_cli::serve::server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CULTIVAR_LOG", "error,cultivar=info"))
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("serve", sub_m)) => handle_serve(sub_m).await,
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("inspect", sub_m)) => handle_inspect(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn artifact_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("artifact")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH))
}

/// Load the artifact or exit: without a model there is nothing to serve.
fn load_or_exit(path: &Path) -> ArtifactBundle {
    match load_artifact(path).with_context(|| format!("Cannot load artifact {}", path.display())) {
        Ok(bundle) => bundle,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    }
}

async fn handle_serve(matches: &ArgMatches) -> Result<()> {
    let config = ServerConfig::from_arguments(matches);
    log::info!("[Cultivar::Serve] Loading artifact: {:?}", config.artifact);
    let bundle = load_or_exit(&config.artifact);
    server::serve(&config, Arc::new(bundle)).await
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let samples: &PathBuf = matches
        .get_one("samples")
        .context("samples argument is required")?;
    let handler = RequestHandler::new(Arc::new(load_or_exit(&artifact_path(matches))));

    let stdout = std::io::stdout();
    let summary = run_predict(&handler, samples, stdout.lock())?;
    log::info!(
        "[Cultivar::Predict] {} predicted, {} rejected",
        summary.predicted,
        summary.rejected
    );
    Ok(())
}

fn handle_inspect(matches: &ArgMatches) -> Result<()> {
    let bundle = load_or_exit(&artifact_path(matches));
    write_summary(&bundle, std::io::stdout().lock())
}
