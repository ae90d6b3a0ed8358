//! glim CLI
//!
//! Unicode code highlighter: reads source text, renders keywords bold and
//! comments outlined using unicode alphabets, and prints the result as
//! plain text.

mod commands;

use std::sync::Once;

use commands::{highlight_file, tokens_file, HighlightOptions};
use glim_highlight::GlyphStyle;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=glim=debug` or
/// `RUST_LOG=glim=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "highlight" => {
            if args.len() < 3 {
                eprintln!("Usage: glim highlight <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --keywords=a,b,c        Comma-separated keyword list");
                eprintln!("  --keywords-file=<path>  File with one keyword per line");
                eprintln!("  --keyword-style=<name>  Alphabet for keywords (default: bold-sans)");
                eprintln!("  --comment-style=<name>  Alphabet for comments (default: double-struck)");
                std::process::exit(1);
            }

            let mut options = HighlightOptions::default();
            let mut path: Option<&str> = None;

            for arg in args.iter().skip(2) {
                if let Some(list) = arg.strip_prefix("--keywords=") {
                    options
                        .keywords
                        .extend(list.split(',').map(str::to_string));
                } else if let Some(file) = arg.strip_prefix("--keywords-file=") {
                    options.keywords_file = Some(file.to_string());
                } else if let Some(name) = arg.strip_prefix("--keyword-style=") {
                    options.keyword_style = parse_style(name);
                } else if let Some(name) = arg.strip_prefix("--comment-style=") {
                    options.comment_style = parse_style(name);
                } else if (!arg.starts_with('-') || arg == "-") && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("unknown option '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: glim highlight <file> [options]");
                std::process::exit(1);
            };

            highlight_file(path, &options);
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: glim tokens <file>");
                std::process::exit(1);
            }
            tokens_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse a style name, exiting with the accepted names on failure.
fn parse_style(name: &str) -> GlyphStyle {
    match GlyphStyle::from_name(name) {
        Some(style) => style,
        None => {
            eprintln!(
                "unknown style '{name}' (expected one of: {})",
                GlyphStyle::names().join(", ")
            );
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("glim - unicode code highlighter");
    println!();
    println!("Usage: glim <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  highlight <file>   Highlight a file (use '-' for stdin)");
    println!("  tokens <file>      Dump the token stream (debugging)");
    println!("  help               Show this message");
    println!();
    println!("Run a command without arguments for its options.");
}
