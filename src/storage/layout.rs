use chrono::{DateTime, Duration, SubsecRound, Utc};

pub const BUCKET: &str = "spotify-data-engineering-project";
pub const TO_PROCESS_PREFIX: &str = "discover_weekly/raw_data/to_process/";
pub const PROCESSED_PREFIX: &str = "discover_weekly/raw_data/processed/";
pub const SONG_PREFIX: &str = "discover_weekly/transformed_data/song_data/";
pub const ALBUM_PREFIX: &str = "discover_weekly/transformed_data/album_data/";
pub const ARTIST_PREFIX: &str = "discover_weekly/transformed_data/artist_data/";
pub const RAW_EXTENSION: &str = ".json";

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One of the three normalized outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Songs,
    Albums,
    Artists,
}

impl Entity {
    pub fn prefix(self) -> &'static str {
        match self {
            Entity::Songs => SONG_PREFIX,
            Entity::Albums => ALBUM_PREFIX,
            Entity::Artists => ARTIST_PREFIX,
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            Entity::Songs => "songs_transformed_",
            Entity::Albums => "album_transformed_",
            Entity::Artists => "artist_transformed_",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::Songs => "songs",
            Entity::Albums => "albums",
            Entity::Artists => "artists",
        };
        write!(f, "{name}")
    }
}

pub fn raw_document_key(stamp: &str) -> String {
    format!("{TO_PROCESS_PREFIX}spotify_raw_data{stamp}{RAW_EXTENSION}")
}

/// Archive key for a consumed raw document, keeping its base filename.
pub fn processed_key(source_key: &str) -> String {
    format!("{PROCESSED_PREFIX}{}", crate::utils::base_name(source_key))
}

pub fn output_key(entity: Entity, stamp: &str) -> String {
    format!("{}{}{stamp}.csv", entity.prefix(), entity.file_stem())
}

pub fn is_raw_document(key: &str) -> bool {
    key.ends_with(RAW_EXTENSION)
}

/// Wall-clock timestamps for blob names, strictly increasing within a run.
///
/// Two calls landing on the same microsecond would otherwise produce the
/// same output key and the second write would replace the first.
#[derive(Debug, Default)]
pub struct OutputStamp {
    last: Option<DateTime<Utc>>,
}

impl OutputStamp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> String {
        self.next_from(Utc::now())
    }

    pub fn next_from(&mut self, now: DateTime<Utc>) -> String {
        let now = now.trunc_subsecs(6);
        let stamp = match self.last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last = Some(stamp);
        stamp.format(STAMP_FORMAT).to_string()
    }
}
