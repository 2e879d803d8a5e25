//! Command-line interface for keysheet
//!
//! Usage:
//!   keysheet [INPUT] [--output `<path>`] [--config `<file>`] [--layer `<name>`]... [--format html|json]
//!
//! With no arguments the defaults from `defaults/keysheet.default.toml` apply, overlaid by a
//! `keysheet.toml` in the working directory when one exists.

use clap::{Arg, ArgAction, Command};
use keysheet::config::{CliOverrides, KeysheetConfig, Loader, LOCAL_CONFIG_FILE};
use keysheet::{OutputFormat, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("keysheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an HTML cheatsheet from kanata layer definitions")
        .arg(
            Arg::new("input")
                .help("Path to the kanata configuration")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the HTML file to write"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional TOML configuration file"),
        )
        .arg(
            Arg::new("layer")
                .long("layer")
                .short('l')
                .help("Layer to draw, in order (repeatable; replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'html' writes the output file, 'json' prints the model")
                .value_parser(["html", "json"])
                .default_value("html"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let format = matches
        .get_one::<String>("format")
        .and_then(|name| OutputFormat::from_name(name))
        .unwrap_or(OutputFormat::Html);

    let pipeline = Pipeline::new(config);
    match format {
        OutputFormat::Html => handle_write_command(&pipeline),
        OutputFormat::Json => handle_print_command(&pipeline),
    }
}

/// Defaults, then `keysheet.toml`, then `--config`, then individual flags
fn load_config(matches: &clap::ArgMatches) -> Result<KeysheetConfig, config::ConfigError> {
    let overrides = CliOverrides {
        input: matches.get_one::<String>("input").map(PathBuf::from),
        output: matches.get_one::<String>("output").map(PathBuf::from),
        layers: matches
            .get_many::<String>("layer")
            .map(|layers| layers.cloned().collect())
            .unwrap_or_default(),
    };

    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.with_cli_overrides(&overrides)?.build()
}

/// Write the HTML cheatsheet
fn handle_write_command(pipeline: &Pipeline) {
    match pipeline.run() {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the resolved model as JSON
fn handle_print_command(pipeline: &Pipeline) {
    let output = pipeline
        .load()
        .and_then(|source| pipeline.render(&source, OutputFormat::Json))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    println!("{}", output);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "keysheet=debug" } else { "keysheet=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
