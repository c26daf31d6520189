use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::local_services;
use crate::{
    config::{CatalogConfig, ExtractConfig, MailConfig},
    error, info,
    pipeline::Extractor,
    spotify::SpotifyClient,
    success,
};

pub async fn extract() {
    let catalog = match CatalogConfig::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };
    let mail = match MailConfig::from_env() {
        Ok(m) => m,
        Err(e) => error!("{}", e),
    };
    let (storage, store, notifier) = local_services();
    info!("Storing raw data below {}", storage.root.display());

    let extractor = Extractor::new(
        SpotifyClient::new(catalog),
        store,
        notifier,
        mail,
        ExtractConfig::from_env(),
    )
    .with_bucket(storage.bucket);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Extracting playlist data from Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = extractor.run().await;
    pb.finish_and_clear();

    match result {
        Ok(status) => success!("[{}] {}", status.status_code, status.body),
        Err(e) => error!("Extraction failed: {}", e),
    }
}
