use crate::{
    Res,
    config::{ExtractConfig, MailConfig},
    info,
    notify::{Email, Notifier},
    spotify::Catalog,
    storage::{BUCKET, BlobStore, OutputStamp, raw_document_key},
    success,
    types::RunStatus,
    utils,
};

/// Pulls one playlist's track listing into `to_process/`.
pub struct Extractor<C, S, N> {
    catalog: C,
    store: S,
    notifier: N,
    mail: MailConfig,
    config: ExtractConfig,
    bucket: String,
}

impl<C: Catalog, S: BlobStore, N: Notifier> Extractor<C, S, N> {
    pub fn new(catalog: C, store: S, notifier: N, mail: MailConfig, config: ExtractConfig) -> Self {
        Self {
            catalog,
            store,
            notifier,
            mail,
            config,
            bucket: BUCKET.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one extraction and returns the key the raw document was stored at.
    ///
    /// Fetch, store and notify happen in that order; any failure ends the
    /// run with nothing after it attempted.
    pub async fn extract(&self) -> Res<String> {
        let playlists = self.catalog.user_playlists(&self.config.catalog_user).await?;
        let listed = playlists["items"].as_array().map_or(0, |items| items.len());
        info!(
            "User {} owns {} playlists on the first page",
            self.config.catalog_user, listed
        );

        let playlist_id = utils::playlist_id_from_link(&self.config.playlist_link);
        info!("Fetching tracks of playlist {}", playlist_id);
        let raw = self.catalog.playlist_tracks(&playlist_id).await?;

        let body = serde_json::to_vec(&raw)?;
        let key = raw_document_key(&OutputStamp::new().next());
        self.store.put(&self.bucket, &key, body).await?;
        success!("Raw playlist data written to {}", key);

        Ok(key)
    }

    /// Extracts and sends the start notification.
    pub async fn run(&self) -> Res<RunStatus> {
        self.extract().await?;
        self.notifier
            .send(&Email::extraction_started(&self.mail))
            .await?;
        Ok(utils::success_status(&self.mail.recipient))
    }
}
