//! End-to-end tour of the diagnostics reports.
//! Run with: cargo run --example report_rendering

use std::env;
use std::fs;

use sigma_diagnostics::diagnostics::{Diagnostic, DiagnosticCollector, Origin};
use sigma_diagnostics::frontend::{LexerData, Token};
use sigma_diagnostics::report::{ReportConfig, Reporter};

fn main() {
    println!("\nSigma diagnostics demo: a fake compiler run\n");
    println!("{}", "=".repeat(70));

    let out_path = env::temp_dir().join("sigma_report_demo.txt");
    let mut collector = DiagnosticCollector::new();

    // The stages run strictly one after another, each borrowing the
    // collector for its turn.
    let data = run_fake_lexer(&mut collector);
    run_fake_parser(&mut collector);

    // Driver policy: the latch decides whether later stages still run.
    if collector.has_fatal_error() {
        println!("fatal error recorded, skipping code generation\n");
    } else {
        run_fake_codegen(&mut collector);
    }

    let config = ReportConfig::new()
        .with_output_file(&out_path)
        .with_file_output(true);
    let mut reporter = Reporter::new(config);

    reporter.out_tokens(&data);
    reporter.out_identifiers_table(&data);
    reporter.out_constants_table(&data);
    reporter.out_keywords_table(&data);
    reporter.out_errors(collector.diagnostics());

    println!("{}", "-".repeat(70));
    println!("Driver helper output:\n");
    reporter.usage_hint("sigma");
    reporter.out_options();
    drop(reporter);

    println!("{}", "=".repeat(70));
    match fs::read_to_string(&out_path) {
        Ok(mirror) => {
            println!("\nPlain mirror written to {}:\n", out_path.display());
            println!("{mirror}");
        }
        Err(err) => eprintln!("Error reading {}: {}", out_path.display(), err),
    }
}

fn run_fake_lexer(collector: &mut DiagnosticCollector) -> LexerData {
    let mut data = LexerData::new();

    for (code, lexeme, line, position) in [
        (5, "let", 1, 1),
        (1, "counter", 1, 5),
        (20, "=", 1, 13),
        (2, "10", 1, 15),
        (21, ";", 1, 17),
        (5, "let", 2, 1),
        (3, "limit", 2, 5),
    ] {
        data.tokens.push(Token::new(code, lexeme, line, position));
    }

    data.keywords.insert("let", 5);
    data.identifiers.insert("counter", 1);
    data.identifiers.insert("limit", 3);
    data.constants.insert("10", 2);

    // The lexer records what it saw and keeps scanning.
    collector.report(Diagnostic::syntax_error("stray '@'", 2, 11, Origin::Lexer));

    data
}

fn run_fake_parser(collector: &mut DiagnosticCollector) {
    collector.report(Diagnostic::syntax_error(
        "expected expression after '='",
        2,
        12,
        Origin::Parser,
    ));
    collector.mark_fatal();
}

fn run_fake_codegen(collector: &mut DiagnosticCollector) {
    collector.report(Diagnostic::general_error(
        "code generation disabled in this demo",
        Origin::CodeGenerator,
    ));
}
