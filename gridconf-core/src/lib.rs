//! Core utilities for the gridconf configuration generator.
//!
//! This crate provides fundamental helpers used across the gridconf
//! ecosystem: zero-padding and timestamp formatting for provenance
//! comments, and probing of JSON configuration objects.

mod json;
mod utils;

pub use json::has_any_property;
pub use utils::{format_timestamp, main_comment, pad_left_zeros};
