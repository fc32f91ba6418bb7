//! Deterministic renderers for stored reports.
//!
//! Rendering is presentation only; nothing here affects findings, score, or
//! summary.

#![forbid(unsafe_code)]

mod markdown;

pub use markdown::render_markdown;
