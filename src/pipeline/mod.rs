//! The two pipeline components.
//!
//! [`Extractor`] and [`Transformer`] run independently; the only thing they
//! share is the blob store namespace. Each component owns its collaborators
//! (catalog, blob store, notifier) and configuration, handed in at
//! construction time.
//!
//! Runs are strictly sequential and must not overlap: two transformers on the
//! same `to_process/` prefix would both pick up the same documents.

mod extract;
mod transform;

pub use extract::Extractor;
pub use transform::{DocumentSummary, OutputFile, TransformReport, Transformer};
