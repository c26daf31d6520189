use crate::{
    Res,
    config::MailConfig,
    info,
    notify::{Email, Notifier},
    storage::{self, BUCKET, BlobStore, Entity, OutputStamp, TO_PROCESS_PREFIX, is_raw_document},
    success,
    transform::{self, EntityTables},
    types::RunStatus,
    utils, warning,
};

/// One written entity table.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub entity: Entity,
    pub key: String,
    pub rows: usize,
}

/// What happened to one raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub source_key: String,
    pub archived_key: String,
    pub outputs: Vec<OutputFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    pub status: RunStatus,
    pub documents: Vec<DocumentSummary>,
    pub skipped: Vec<String>,
}

/// Normalizes every raw document waiting in `to_process/`.
pub struct Transformer<S, N> {
    store: S,
    notifier: N,
    mail: MailConfig,
    bucket: String,
}

impl<S: BlobStore, N: Notifier> Transformer<S, N> {
    pub fn new(store: S, notifier: N, mail: MailConfig) -> Self {
        Self {
            store,
            notifier,
            mail,
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

    /// Processes every pending raw document, then sends one completion email.
    ///
    /// Documents are handled one after another. The first error aborts the
    /// run: documents already handled stay written and archived, the failing
    /// one and everything after it stay in `to_process/`.
    pub async fn run(&self) -> Res<TransformReport> {
        let keys = self.store.list(&self.bucket, TO_PROCESS_PREFIX).await?;
        info!("Found {} keys under {}", keys.len(), TO_PROCESS_PREFIX);

        let mut stamp = OutputStamp::new();
        let mut documents = Vec::new();
        let mut skipped = Vec::new();

        for key in keys {
            if !is_raw_document(&key) {
                warning!("Skipping {}: not a raw document", key);
                skipped.push(key);
                continue;
            }
            documents.push(self.process_document(&key, &mut stamp).await?);
        }

        self.notifier
            .send(&Email::transformation_completed(&self.mail))
            .await?;

        Ok(TransformReport {
            status: utils::success_status(&self.mail.recipient),
            documents,
            skipped,
        })
    }

    async fn process_document(&self, key: &str, stamp: &mut OutputStamp) -> Res<DocumentSummary> {
        info!("Transforming {}", key);
        let body = self.store.get(&self.bucket, key).await?;
        let doc = transform::parse_document(key, &body)?;
        let tables = EntityTables::from_document(&doc)?;

        let ts = stamp.next();
        let outputs = vec![
            self.write_table(Entity::Songs, &ts, tables.songs.len(), tables.songs_csv()?)
                .await?,
            self.write_table(Entity::Albums, &ts, tables.albums.len(), tables.albums_csv()?)
                .await?,
            self.write_table(
                Entity::Artists,
                &ts,
                tables.artists.len(),
                tables.artists_csv()?,
            )
            .await?,
        ];

        let archived_key = storage::archive(&self.store, &self.bucket, key).await?;
        success!(
            "{}: {} songs, {} albums, {} artists",
            utils::base_name(key),
            tables.songs.len(),
            tables.albums.len(),
            tables.artists.len()
        );

        Ok(DocumentSummary {
            source_key: key.to_string(),
            archived_key,
            outputs,
        })
    }

    async fn write_table(
        &self,
        entity: Entity,
        ts: &str,
        rows: usize,
        csv: String,
    ) -> Res<OutputFile> {
        let key = storage::output_key(entity, ts);
        self.store
            .put(&self.bucket, &key, csv.into_bytes())
            .await?;
        Ok(OutputFile { entity, key, rows })
    }
}
