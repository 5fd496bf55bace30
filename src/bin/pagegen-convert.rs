use o4o_pagegen::{convert, validate};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut json_output = false;
    let mut files: Vec<String> = Vec::new();
    for arg in &args[1..] {
        if arg == "--json" {
            json_output = true;
        } else {
            files.push(arg.clone());
        }
    }

    if files.is_empty() {
        eprintln!("Usage: pagegen-convert [--json] <file.jsx|file.tsx>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  pagegen-convert Hero.tsx");
        eprintln!("  pagegen-convert --json src/sections/*.tsx");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in files {
        match convert_file(&file_path, json_output) {
            Ok(summary) => {
                println!("✓ {} {}", file_path, summary);
            }
            Err(message) => {
                eprintln!("✗ {} failed:", file_path);
                eprintln!("  {}", message);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn convert_file(path: &str, json_output: bool) -> Result<String, String> {
    let source = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let validation = validate(&source);
    if !validation.valid {
        return Err(validation
            .error
            .unwrap_or_else(|| "invalid source".to_string()));
    }

    let result = convert(&source).map_err(|e| e.to_string())?;

    if json_output {
        let rendered =
            serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{}", rendered);
    }

    Ok(format!(
        "converted: {} blocks, {} placeholders",
        result.stats.total_blocks, result.stats.placeholder_count
    ))
}
