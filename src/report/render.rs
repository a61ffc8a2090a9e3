//! Report layout.
//!
//! Every function here builds a `String` and performs no output. The
//! palette is plain data, so the console and file sinks share one set of
//! layout routines; the file sink passes [`Colors::no_color`] and gets the
//! same bytes minus the escape codes.

use crate::diagnostics::record::Diagnostic;
use crate::frontend::lexer_data::SymbolTable;
use crate::frontend::token::Token;

use super::align::{len_chars, slack};
use super::colors::Colors;

/// Banner of the token dump on the console sink.
pub const CONSOLE_TOKEN_BANNER: &str = "============ mToken List: ============";
/// Banner of the token dump on the file sink.
pub const FILE_TOKEN_BANNER: &str = "============ Token List: ============";

const ERROR_BANNER: &str = "============ Error List: ============";
const REPORT_FOOTER: &str = "=====================================";

const TOKEN_HEADER: &str = " Line   Pos   Code           Lexeme";
const TOKEN_LINE_WIDTH: usize = 4;
const TOKEN_POSITION_WIDTH: usize = 4;
const TOKEN_CODE_WIDTH: usize = 8;
const TOKEN_LEXEME_WIDTH: usize = 22;

const TABLE_HEADER: &str = "| Code|          Lexeme         |";
const TABLE_DIVIDER: &str = "+-----+-------------------------+";
const TABLE_CODE_WIDTH: usize = 5;
const TABLE_LEXEME_WIDTH: usize = 25;

/// Render the error report
///
/// Displays one line per record, in collection order:
/// `[<origin>] (<line>,<position>): <category>: <message>`
///
/// Records holding the line sentinel `"0"` have no source location and
/// drop the `(<line>,<position>):` clause. An empty slice renders as an
/// empty string; the banner and footer only appear around actual records.
pub fn render_error_report(diagnostics: &[Diagnostic], colors: &Colors) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(colors.red);
    out.push_str(ERROR_BANNER);
    out.push_str(colors.reset);
    out.push_str("\n\n");

    for diagnostic in diagnostics {
        out.push('[');
        out.push_str(colors.origin_color(diagnostic.origin()));
        out.push_str(diagnostic.origin().as_str());
        out.push_str(colors.reset);
        out.push_str("] ");

        let line = diagnostic.line();
        if line != "0" {
            out.push_str(&format!(
                "({}{}{},{}{}{}): ",
                colors.cyan,
                line,
                colors.reset,
                colors.cyan,
                diagnostic.position(),
                colors.reset
            ));
        }

        out.push_str(colors.red);
        out.push_str(diagnostic.category().as_str());
        out.push_str(colors.reset);
        out.push_str(": ");
        out.push_str(diagnostic.message());
        out.push('\n');
    }

    out.push_str(colors.red);
    out.push_str(REPORT_FOOTER);
    out.push_str(colors.reset);
    out.push_str("\n\n");
    out
}

/// Render the token dump
///
/// The dump is emitted even for an empty token stream. The banner is
/// caller-supplied because the sinks carry different ones, see
/// [`CONSOLE_TOKEN_BANNER`] and [`FILE_TOKEN_BANNER`].
pub fn render_token_report(tokens: &[Token], banner: &str, colors: &Colors) -> String {
    let mut out = String::new();
    out.push_str(colors.green);
    out.push_str(banner);
    out.push_str(colors.reset);
    out.push('\n');
    out.push_str(TOKEN_HEADER);
    out.push_str("\n\n");

    for token in tokens {
        out.push('|');
        out.push_str(&colored_cell(
            &token.line.to_string(),
            TOKEN_LINE_WIDTH,
            colors.cyan,
            colors,
        ));
        out.push_str("][");
        out.push_str(&colored_cell(
            &token.position.to_string(),
            TOKEN_POSITION_WIDTH,
            colors.cyan,
            colors,
        ));
        out.push(']');
        out.push_str(&colored_cell(
            &token.code.to_string(),
            TOKEN_CODE_WIDTH,
            colors.red,
            colors,
        ));
        out.push('=');
        out.push_str(&lexeme_cell(&token.lexeme, TOKEN_LEXEME_WIDTH, colors));
        out.push('\n');
    }

    out.push_str(colors.green);
    out.push_str(REPORT_FOOTER);
    out.push_str(colors.reset);
    out.push_str("\n\n");
    out
}

/// Render one lexeme table dump
///
/// Shared by the identifiers, constants and keywords tables. Entries print
/// in the table's own iteration order. An empty table still gets its
/// banner, header and footer.
pub fn render_symbol_table(name: &str, table: &SymbolTable, colors: &Colors) -> String {
    let mut out = String::new();
    out.push_str("==========");
    out.push_str(colors.cyan);
    out.push_str(name);
    out.push(':');
    out.push_str(colors.reset);
    out.push_str("=========");
    out.push_str("\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_DIVIDER);
    out.push('\n');

    for (lexeme, code) in table.iter() {
        out.push('|');
        out.push_str(&colored_cell(
            &code.to_string(),
            TABLE_CODE_WIDTH,
            colors.red,
            colors,
        ));
        out.push('|');
        out.push_str(&lexeme_cell(lexeme, TABLE_LEXEME_WIDTH, colors));
        out.push_str("|\n");
    }

    out.push_str(REPORT_FOOTER);
    out.push_str("\n\n");
    out
}

/// One-line usage hint for the driver binary.
pub fn render_usage_hint(program: &str) -> String {
    format!("Usage: {} <source_file> [options...] <out_file>\n", program)
}

/// Echo of the accepted driver options.
pub fn render_options() -> String {
    String::from("Source file: \nOut file: \n")
}

/// Centers `text` in a `width`-wide column, coloring the text but not the
/// padding.
fn colored_cell(text: &str, width: usize, color: &str, colors: &Colors) -> String {
    let (left, right) = slack(width, len_chars(text));
    format!(
        "{}{}{}{}{}",
        " ".repeat(left),
        color,
        text,
        colors.reset,
        " ".repeat(right)
    )
}

/// Centers the decorated lexeme `<text>` in a `width`-wide column. The
/// angle brackets count toward the centered length and stay uncolored.
fn lexeme_cell(lexeme: &str, width: usize, colors: &Colors) -> String {
    let (left, right) = slack(width, len_chars(lexeme) + 2);
    format!(
        "{}<{}{}{}>{}",
        " ".repeat(left),
        colors.yellow,
        lexeme,
        colors.reset,
        " ".repeat(right)
    )
}
