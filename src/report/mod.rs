//! HTML report generation.
//!
//! The report is produced in three steps, each usable on its own:
//!
//! 1. [`Template`] supplies the page text with `{{name}}` placeholders;
//! 2. [`render`] fills the placeholders from a year's plays and [`Stats`];
//! 3. [`write_report`] saves the page as `PlayHistory_<year>.html`.
//!
//! [`generate`] runs all of them against a [`PlaySource`].
//!
//! [`PlaySource`]: crate::db::PlaySource
//! [`Stats`]: crate::stats::Stats

mod encode;
mod generate;
mod render;
mod template;
mod writer;

pub use encode::{html_encode, html_encode_opt, script_json};
pub use generate::{generate, GeneratedReport};
pub use render::{format_total_duration, render};
pub use template::{Template, PLACEHOLDERS};
pub use writer::{report_file_name, write_report};
