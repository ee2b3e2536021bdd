//! Core pipeline for skillindex.
//!
//! Ties discovery, header extraction, table rendering, and the document
//! splice into the end-to-end `build_index` / `check_index` workflows.

pub mod pipeline;
pub mod writer;

pub use pipeline::{
    BuildOutcome, CheckOutcome, Regenerated, WriteStatus, build_index, check_index,
    collect_artifacts, load_artifact, regenerate,
};
