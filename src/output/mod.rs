//! Output formatting for the command-line tool.
//!
//! - [`summary`] - CIDR block summary records
//! - [`terminal`] - quoted fixed-width terminal fields

mod summary;
mod terminal;

pub use summary::CidrSummary;
pub use terminal::{format_field, format_row};
