//! Report rendering and output.
//!
//! Layout lives in [`render`] as pure functions over a [`colors::Colors`]
//! palette; [`reporter`] owns the sinks and decides what goes where.

pub mod align;
pub mod colors;
pub mod render;
pub mod reporter;

pub use colors::Colors;
pub use render::{
    CONSOLE_TOKEN_BANNER, FILE_TOKEN_BANNER, render_error_report, render_options,
    render_symbol_table, render_token_report, render_usage_hint,
};
pub use reporter::{ReportConfig, Reporter};

#[cfg(test)]
mod align_test;
