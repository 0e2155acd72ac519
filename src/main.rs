//! Gridcalc - a spreadsheet formula engine with a small CLI.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use gridcalc_core::storage::{load_sheet, write_sheet};
use gridcalc_core::{CellRef, Document};

fn print_usage() {
    eprintln!("Usage: gridcalc [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                 Sheet file to load ('CELLREF: INPUT' lines)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <EXPR>   Evaluate a formula and print the result");
    eprintln!("  -g, --get <CELLREF>    Print one cell of the loaded sheet (can be repeated)");
    eprintln!("  -o, --output <FILE>    Write the loaded sheet back out");
    eprintln!("  -h, --help             Print help");
}

struct Options {
    command: Option<String>,
    file: Option<PathBuf>,
    gets: Vec<String>,
    output: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut options = Options {
        command: None,
        file: None,
        gets: Vec::new(),
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires an expression");
                    return None;
                }
                options.command = Some(args[i].to_string());
            }
            "-g" | "--get" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --get requires a cell reference");
                    return None;
                }
                options.gets.push(args[i].to_string());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    return None;
                }
                options.output = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                return None;
            }
            _ => {
                if options.file.is_none() {
                    options.file = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    return None;
                }
            }
        }
        i += 1;
    }

    Some(options)
}

/// Evaluate one formula in a scratch document and print its display value.
/// Returns false when the result is an error sentinel.
fn run_command(expr: &str) -> bool {
    let input = if expr.starts_with('=') {
        expr.to_string()
    } else {
        format!("={}", expr)
    };

    let mut document = Document::new();
    document.apply_edit_at(0, 0, &input);
    let display = document
        .get_cell(0, 0)
        .map(|cell| cell.display.clone())
        .unwrap_or_default();

    println!("{}", display);
    !display.starts_with('#')
}

fn run_file(path: &std::path::Path, options: &Options) -> Result<()> {
    let document =
        load_sheet(path).with_context(|| format!("failed to load {}", path.display()))?;

    if let Some(output) = &options.output {
        write_sheet(output, &document)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    if options.gets.is_empty() {
        // Computed view: every non-empty cell with its display value.
        let snapshot = document.snapshot();
        let mut cells: Vec<&CellRef> = snapshot
            .iter()
            .filter(|(_, cell)| !cell.raw.is_empty())
            .map(|(cell_ref, _)| cell_ref)
            .collect();
        cells.sort_by_key(|cell_ref| (cell_ref.row, cell_ref.col));
        for cell_ref in cells {
            println!("{}: {}", cell_ref, document.get_display(cell_ref));
        }
        return Ok(());
    }

    for name in &options.gets {
        let Some(cell_ref) = CellRef::from_str(name) else {
            bail!("invalid cell reference: {}", name);
        };
        println!("{}", document.get_display(&cell_ref));
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(options) = parse_args(&args) else {
        print_usage();
        std::process::exit(1);
    };

    if let Some(expr) = &options.command {
        if !run_command(expr) {
            std::process::exit(1);
        }
        return;
    }

    let Some(path) = options.file.clone() else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(e) = run_file(&path, &options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
