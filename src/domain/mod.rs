//! Domain layer containing the validation rules.
//!
//! Nothing in this layer performs I/O directly: network access is abstracted
//! behind the [`probe::UrlProber`] trait and implemented in
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`allow_list`] - OneDrive/SharePoint host filter
//! - [`probe`] - Probe trait and transport error taxonomy
//! - [`verdict`] - Status code and error classification
//! - [`entities`] - Per-URL and batch results
//!
//! # Validation Flow
//!
//! 1. [`allow_list::is_onedrive_url`] screens single-URL requests
//! 2. A [`probe::UrlProber`] returns the final status code or a [`probe::ProbeError`]
//! 3. [`verdict::Verdict`] turns either outcome into `(valid, reason)`

pub mod allow_list;
pub mod entities;
pub mod probe;
pub mod verdict;

pub use probe::{ProbeError, UrlProber};
pub use verdict::Verdict;

#[cfg(test)]
pub use probe::MockUrlProber;
