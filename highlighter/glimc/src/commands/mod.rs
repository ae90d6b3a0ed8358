//! CLI commands.

mod highlight;
mod tokens;

pub use highlight::{highlight_file, HighlightOptions};
pub use tokens::tokens_file;

/// Read a file from disk (or stdin for `-`), exiting with a user-friendly
/// error message on failure.
pub(super) fn read_source(path: &str) -> String {
    if path == "-" {
        use std::io::Read;
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => content,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                std::process::exit(1);
            }
        };
    }

    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
