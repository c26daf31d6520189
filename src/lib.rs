//! Spotify Playlist ETL Library
//!
//! This library implements a two-stage batch pipeline around a single Spotify
//! playlist. The extraction stage pulls the playlist's track listing from the
//! Spotify Web API and drops the raw JSON into blob storage. The transformation
//! stage normalizes every raw document into song, album and artist tables,
//! writes them back as CSV and archives the consumed inputs.
//!
//! # Modules
//!
//! - `cli` - Command handlers used by the binary
//! - `config` - Run configuration loaded from the environment
//! - `error` - Error taxonomy shared by every stage
//! - `notify` - Notification emails sent at the end of a run
//! - `pipeline` - The extractor and transformer components
//! - `spotify` - Spotify Web API client implementation
//! - `storage` - Blob store abstraction and namespace layout
//! - `transform` - Normalization of raw documents into entity tables
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotify_etl::{config, notify::RecordingNotifier, pipeline::Transformer, storage::MemoryBlobStore};
//!
//! #[tokio::main]
//! async fn main() -> spotify_etl::Res<()> {
//!     let mail = config::MailConfig::from_env()?;
//!     let transformer = Transformer::new(MemoryBlobStore::new(), RecordingNotifier::new(), mail);
//!     transformer.run().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod spotify;
pub mod storage;
pub mod transform;
pub mod types;
pub mod utils;

pub use error::EtlError;

/// A convenient Result type alias for operations that may fail.
///
/// Every stage of the pipeline reports failures through [`EtlError`], so a
/// single alias covers catalog calls, storage calls, parsing and
/// notification alike. Errors are never swallowed inside the library; they
/// propagate to the caller and end the run.
///
/// # Example
///
/// ```
/// use spotify_etl::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, EtlError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listing raw documents under {}", prefix);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Archived {}", key);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// binary uses this; library code returns [`EtlError`] instead.
///
/// # Example
///
/// ```
/// error!("Transformation failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Skipping {}: not a raw document", key);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
