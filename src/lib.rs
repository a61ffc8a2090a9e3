pub mod diagnostics;
pub mod frontend;
pub mod report;
