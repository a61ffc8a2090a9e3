//! Report sinks: a colorized console plus an optional plain-text mirror
//! file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::diagnostics::record::Diagnostic;
use crate::frontend::lexer_data::{LexerData, SymbolTable};

use super::colors::Colors;
use super::render::{
    CONSOLE_TOKEN_BANNER, FILE_TOKEN_BANNER, render_error_report, render_options,
    render_symbol_table, render_token_report, render_usage_hint,
};

/// Where and whether reports are mirrored to a file.
///
/// `file_output_enabled` gates only the error report's mirror. The token
/// and table dumps are debug aids and mirror whenever the sink is open.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub output_path: Option<PathBuf>,
    pub file_output_enabled: bool,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_file_output(mut self, enabled: bool) -> Self {
        self.file_output_enabled = enabled;
        self
    }
}

/// Mirror-file handle.
///
/// Opened once when the reporter is built. An open failure is logged once
/// and leaves the sink unavailable for the rest of the run, so every later
/// file write quietly does nothing. There is no reopening and no third
/// state; the handle is released when the reporter drops.
#[derive(Debug)]
enum FileSink {
    Active(File),
    Unavailable,
}

impl FileSink {
    fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return FileSink::Unavailable;
        };

        match File::create(path) {
            Ok(file) => FileSink::Active(file),
            Err(err) => {
                eprintln!("Error opening file {}: {}", path.display(), err);
                FileSink::Unavailable
            }
        }
    }

    fn write(&mut self, text: &str) {
        if let FileSink::Active(file) = self {
            // Mid-run io errors are dropped; the sink has no
            // degraded-after-open state.
            let _ = file.write_all(text.as_bytes());
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, FileSink::Active(_))
    }
}

/// Drives both report sinks.
///
/// Console output is styled with the reporter's palette; the file mirror
/// always renders plain.
pub struct Reporter {
    config: ReportConfig,
    colors: Colors,
    file: FileSink,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_colors(config, Colors::new())
    }

    /// Builds a reporter with an explicit console palette instead of the
    /// NO_COLOR-derived one.
    pub fn with_colors(config: ReportConfig, colors: Colors) -> Self {
        let file = FileSink::open(config.output_path.as_deref());
        Self {
            config,
            colors,
            file,
        }
    }

    /// Writes the error report to the console and, when file output is
    /// enabled, mirrors it to the file. An empty slice writes nothing at
    /// all to either sink.
    pub fn out_errors(&mut self, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            return;
        }

        print!("{}", render_error_report(diagnostics, &self.colors));

        if !self.config.file_output_enabled {
            return;
        }
        self.file
            .write(&render_error_report(diagnostics, &Colors::no_color()));
    }

    /// Dumps the token stream to both sinks, each under its own banner.
    pub fn out_tokens(&mut self, data: &LexerData) {
        print!(
            "{}",
            render_token_report(&data.tokens, CONSOLE_TOKEN_BANNER, &self.colors)
        );
        self.file.write(&render_token_report(
            &data.tokens,
            FILE_TOKEN_BANNER,
            &Colors::no_color(),
        ));
    }

    pub fn out_identifiers_table(&mut self, data: &LexerData) {
        self.display_table("Identifiers Table", &data.identifiers);
    }

    pub fn out_constants_table(&mut self, data: &LexerData) {
        self.display_table("Constants Table", &data.constants);
    }

    pub fn out_keywords_table(&mut self, data: &LexerData) {
        self.display_table("Keywords Table", &data.keywords);
    }

    /// Echoes the accepted driver options on the console.
    pub fn out_options(&self) {
        print!("{}", render_options());
    }

    /// Prints the driver usage line on the console.
    pub fn usage_hint(&self, program: &str) {
        print!("{}", render_usage_hint(program));
    }

    /// True when the mirror file opened successfully.
    pub fn file_sink_active(&self) -> bool {
        self.file.is_active()
    }

    fn display_table(&mut self, name: &str, table: &SymbolTable) {
        print!("{}", render_symbol_table(name, table, &self.colors));
        self.file
            .write(&render_symbol_table(name, table, &Colors::no_color()));
    }
}
