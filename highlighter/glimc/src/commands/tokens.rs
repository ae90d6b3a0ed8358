//! Debug command: dump the token stream for a file.

use glim_scanner::tokenize;

use super::read_source;

/// Scan a file and display the token stream.
pub fn tokens_file(path: &str) {
    let content = read_source(path);
    let tokens = tokenize(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    let mut pos = 0usize;
    for tok in &tokens {
        let start = pos;
        let end = pos + tok.len as usize;
        let raw = &content[start..end];
        pos = end;
        println!("  {:?} @ {start}..{end} {raw:?}", tok.tag);
    }
}
