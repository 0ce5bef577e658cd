//! Example: Validate a JSON configuration file against a server descriptor.
//!
//! Usage:
//!   cargo run --example validate_config -- <file_path> [--strict]
//!
//! Set `RUST_LOG=assay=debug` to see every conversion as it happens.

use std::env;
use std::fs;

use assay::{
    AssayError, BOOLEAN, Descriptor, NUMBER, STRING, ValidateOptions, Value, validate_with,
};

fn server() -> Descriptor {
    Descriptor::object([
        ("host", STRING.default("127.0.0.1")),
        ("port", NUMBER.default(8080)),
        ("workers", NUMBER.optional()),
        ("tls", BOOLEAN.default(false)),
        ("allowed_origins", Descriptor::array(Descriptor::string()).optional()),
        ("keep_alive", BOOLEAN.optional().deprecated("connections are always kept alive")),
    ])
}

fn main() -> assay::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example validate_config -- <file_path> [--strict]");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let strict = args.iter().any(|a| a == "--strict");

    let text = fs::read_to_string(file_path).map_err(|e| AssayError::Io {
        path: file_path.into(),
        source: e,
    })?;
    let input = Value::from(serde_json::from_str::<serde_json::Value>(&text)?);

    let mut warnings = Vec::new();
    let mut options = ValidateOptions::new().strict(strict).warnings(&mut warnings);
    let validated = validate_with(input, &server(), "server", &mut options)?;

    println!("{}", serde_json::to_string_pretty(&validated)?);

    if !warnings.is_empty() {
        println!();
        println!("## Warnings ({})", warnings.len());
        for warning in &warnings {
            println!("  [{}] {}", warning.kind.label(), warning.message);
        }
    }

    Ok(())
}
