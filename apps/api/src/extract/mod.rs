//! Resume field extraction.
//!
//! The heuristic scanners (`contact`, `education`, `experience`, `skills`)
//! are pure functions over an immutable [`document::Document`] snapshot and
//! form the deterministic fallback path. `remote` wraps the LLM client
//! behind the same [`orchestrator::ResumeExtractor`] seam, and
//! `orchestrator` owns the remote-first / heuristic-fallback merge policy.

pub mod contact;
pub mod document;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod heuristic;
pub mod lexicon;
pub mod orchestrator;
pub mod remote;
pub mod skills;
