// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - http: Makes HTTP HEAD requests to check if links are alive
// - classify: Decides whether a probe outcome means "broken"
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the program can write `checker::LinkChecker` instead of
// `checker::http::LinkChecker`.
// =============================================================================

mod classify;
mod http;

pub use classify::{classify, Outcome, Verdict};
pub use http::{CheckerConfig, LinkChecker, ProbeResult};
