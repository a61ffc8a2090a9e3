//! Diagnostics module.
//!
//! Structured error records for the compiler pipeline: each record carries a
//! message, a source location, the stage that raised it, and a category.
//! Records accumulate in a [`DiagnosticCollector`] and are rendered by the
//! report module at the end of a run.

pub mod collector;
pub mod record;

pub use collector::DiagnosticCollector;
pub use record::{Category, Diagnostic, Origin};

#[cfg(test)]
mod collector_test;
