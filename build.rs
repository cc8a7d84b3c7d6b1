//! Build script to embed the default word lists
//!
//! Reads the goal and accepted word files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/goal_words.txt",
        &Path::new(&out_dir).join("goal_words.rs"),
        "GOAL_WORDS",
        "Words that can be drawn as the hidden target",
    );

    generate_word_list(
        "data/accepted_words.txt",
        &Path::new(&out_dir).join("accepted_words.rs"),
        "ACCEPTED_WORDS",
        "Every word accepted as a guess (superset of GOAL_WORDS)",
    );

    println!("cargo:rerun-if-changed=data/goal_words.txt");
    println!("cargo:rerun-if-changed=data/accepted_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
