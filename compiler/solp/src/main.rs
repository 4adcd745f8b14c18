//! solp: print the parse of Solidity files as JSON.

use rayon::prelude::*;
use serde::Serialize;
use solp::{parse_file, ParseFileError, ParseOptions, ParsedFile, ScanMode};

fn main() {
    solp::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut mode = ScanMode::Full;
    let mut options = ParseOptions::new();
    let mut files = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--imports" => mode = ScanMode::Imports,
            "--comments" => mode = ScanMode::Comments,
            "--tolerant" => options.tolerant = true,
            "--range" => options.range = true,
            "--loc" => options.loc = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown option '{flag}'");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            path => files.push(path),
        }
    }

    if files.is_empty() {
        print_usage();
        return;
    }

    // Parse in parallel, report in argument order.
    let results: Vec<Result<ParsedFile, ParseFileError>> = files
        .par_iter()
        .map(|path| parse_file(path, mode, &options))
        .collect();

    for result in results {
        match result {
            Ok(parsed) => match parsed.to_json(&options).and_then(|json| pretty(&json, b"  ")) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("Error: {e}"),
            },
            Err(err) => report(&err),
        }
    }
}

fn report(err: &ParseFileError) {
    match err.location().map(|location| pretty(&location, b"    ")) {
        Some(Ok(location)) => eprintln!("Location: {location}\n{err}"),
        Some(Err(_)) | None => eprintln!("{}: {}", err.name(), err.message()),
    }
}

/// `value` as JSON indented by `indent`.
fn pretty<T: Serialize>(value: &T, indent: &[u8]) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn print_usage() {
    println!("Solidity Parser: file...");
    println!();
    println!("Usage: solp [options] <file.sol>...");
    println!();
    println!("Options:");
    println!("  --imports     Print only the paths of import directives");
    println!("  --comments    Print only the comments");
    println!("  --tolerant    Recover from broken statements inside function bodies");
    println!("  --range       Add \"range\": [start, end] to every node");
    println!("  --loc         Add \"loc\" line/column positions to every node");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sol_parse=debug) for trace output on stderr.");
}
