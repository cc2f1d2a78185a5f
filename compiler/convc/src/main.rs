//! convc: generate Go field-copy functions from a manifest.

use std::path::PathBuf;

use convc::commands::{check_file, explain_error, generate_file, GenerateOptions, RunError};

fn main() {
    convc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: convc generate <manifest.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <path>         Write the generated file (default: stdout)");
                eprintln!("  --no-parallel     Build methods on the calling thread");
                std::process::exit(1);
            }

            let mut manifest = None;
            let mut options = GenerateOptions::default();
            let mut i = 2;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                }
                if args[i] == "--no-parallel" {
                    options.parallel = false;
                } else if !args[i].starts_with('-') && manifest.is_none() {
                    manifest = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("error: unexpected argument '{}'", args[i]);
                    std::process::exit(1);
                }
                i += 1;
            }

            let Some(manifest) = manifest else {
                eprintln!("error: missing manifest path");
                eprintln!("Usage: convc generate <manifest.json> [-o <path>]");
                std::process::exit(1);
            };

            match generate_file(&manifest, &options) {
                Ok(rendered) if options.output.is_none() => print!("{rendered}"),
                Ok(_) => {}
                Err(err) => exit_with(&err),
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: convc check <manifest.json>");
                std::process::exit(1);
            }
            let parallel = !args.iter().any(|a| a == "--no-parallel");
            match check_file(&PathBuf::from(&args[2]), parallel) {
                Ok(count) => println!("{count} methods ok"),
                Err(err) => exit_with(&err),
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: convc explain <ERROR_CODE>");
                eprintln!("Example: convc explain E1002");
                std::process::exit(1);
            }
            match explain_error(&args[2]) {
                Ok(text) => println!("{text}"),
                Err(err) => exit_with(&err),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("convc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_with(err: &RunError) -> ! {
    eprintln!("{}", err.report());
    std::process::exit(1);
}

fn print_usage() {
    println!("convc: Go field-copy function generator");
    println!();
    println!("Usage: convc <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <manifest>   Generate the Go file (-o <path>, --no-parallel)");
    println!("  check <manifest>      Build every method without writing output");
    println!("  explain <code>        Explain an error code (e.g., E1002)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=debug        Enable log output on stderr");
    println!("  CONVC_LOG_TREE=1      Indent log output by span");
}
