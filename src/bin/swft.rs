//! Command-line interface for swft
//! This binary compiles swft sources to python, or stops earlier to show tokens or the tree.
//!
//! Usage:
//!   swft execute `<path>` [--format `<format>`] [--config `<file>`]  - Process a source file
//!   swft list-formats                                             - List all available formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`; `RUST_LOG=swft=trace` shows
//! every alternative the parser tries.

use clap::{Arg, Command};
use env_logger::Env;
use swft::swft::config::{Loader, SwftConfig};
use swft::swft::formats::FormatRegistry;
use swft::swft::pipeline::Compiler;
use swft::swft::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = Command::new("swft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile swft sources to python and inspect each stage")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Process a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the swft file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'code-python', 'ast-treeviz'), see list-formats"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built in defaults"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches
                .get_one::<String>("path")
                .expect("path is a required argument");
            let format = execute_matches.get_one::<String>("format");
            let config = execute_matches.get_one::<String>("config");
            handle_execute_command(path, format.map(String::as_str), config.map(String::as_str));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn load_config(config_path: Option<&str>) -> SwftConfig {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: Option<&str>, config_path: Option<&str>) {
    let config = load_config(config_path);
    let format = format.unwrap_or(&config.output.format);

    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let compiler = Compiler::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &spec, &compiler).unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }

    let registry = FormatRegistry::with_defaults();
    println!("\nTree formats (ast-<name>):\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {:<10} {}", name, description);
    }
}
