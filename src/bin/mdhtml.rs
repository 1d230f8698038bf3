//! Command-line interface for mdhtml
//!
//! Usage:
//!   mdhtml convert `<input>` `<output>` [-r html] [--template `<path>`]  - Convert a Markdown file
//!   mdhtml inspect `<input>` [--format json|yaml]                      - Print the element records
//!   mdhtml formats                                                   - List output formats
//!
//! `--config <path>` layers a TOML file over the built-in defaults and `-v`
//! raises the log level (otherwise read from `MDHTML_LOG`, default `warn`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use mdhtml::markdown::config::{Loader, MdhtmlConfig};
use mdhtml::markdown::pipeline::{ConvertError, Converter};
use std::fmt::Display;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MDHTML_LOG";

fn main() {
    let matches = Command::new("mdhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts Markdown files into HTML pages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file")
                .arg(
                    Arg::new("input")
                        .help("The input file in Markdown")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("The output file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("renderer")
                        .long("renderer")
                        .short('r')
                        .help("Output format (default from config: 'html')"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help("Page template with $title and $content placeholders"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the element records of a Markdown file")
                .arg(
                    Arg::new("input")
                        .help("The input file in Markdown")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Serialization of the records")
                        .value_parser(["json", "yaml"])
                        .default_value("json"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("convert", convert_matches)) => handle_convert_command(&matches, convert_matches),
        Some(("inspect", inspect_matches)) => handle_inspect_command(&matches, inspect_matches),
        Some(("formats", _)) => handle_formats_command(&matches),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(context: &str, err: impl Display) -> ! {
    eprintln!("{context}: {err}");
    process::exit(1);
}

/// Layer `--config` and any subcommand overrides over the defaults
fn load_config(
    matches: &ArgMatches,
    template: Option<&String>,
) -> Result<MdhtmlConfig, ConvertError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(template) = template {
        loader = loader.set_override("html.template", template.as_str())?;
    }
    Ok(loader.build()?)
}

fn converter(config: &MdhtmlConfig) -> Converter {
    Converter::from_config(config).unwrap_or_else(|e| fail("Configuration error", e))
}

fn read_input(matches: &ArgMatches) -> (String, String) {
    let input = matches
        .get_one::<String>("input")
        .cloned()
        .unwrap_or_else(|| fail("Missing argument", "input"));
    let source = fs::read_to_string(&input)
        .unwrap_or_else(|e| fail(&format!("Error reading {input}"), e));
    (input, source)
}

/// Handle the convert command
fn handle_convert_command(root: &ArgMatches, matches: &ArgMatches) {
    let config = load_config(root, matches.get_one::<String>("template"))
        .unwrap_or_else(|e| fail("Failed to load configuration", e));
    let (input, source) = read_input(matches);
    let output = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(|| fail("Missing argument", "output"));
    let renderer = matches
        .get_one::<String>("renderer")
        .cloned()
        .unwrap_or_else(|| config.convert.format.clone());

    let page = converter(&config)
        .convert(&source, &renderer)
        .unwrap_or_else(|e| fail(&format!("Failed to convert {input}"), e));
    fs::write(&output, page).unwrap_or_else(|e| fail(&format!("Error writing {output}"), e));

    println!("Converted {input} to {output} ({renderer})");
}

/// Handle the inspect command
fn handle_inspect_command(root: &ArgMatches, matches: &ArgMatches) {
    let config = load_config(root, None)
        .unwrap_or_else(|e| fail("Failed to load configuration", e));
    let (input, source) = read_input(matches);
    let elements = converter(&config)
        .inspect(&source)
        .unwrap_or_else(|e| fail(&format!("Failed to parse {input}"), e));

    let rendered = match matches.get_one::<String>("format").map(String::as_str) {
        Some("yaml") => serde_yaml::to_string(&elements).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(&elements)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
    }
    .unwrap_or_else(|e| fail("Serialization error", e));

    print!("{rendered}");
}

/// Handle the formats command
fn handle_formats_command(root: &ArgMatches) {
    let config = load_config(root, None)
        .unwrap_or_else(|e| fail("Failed to load configuration", e));
    println!("Available output formats:\n");
    for (name, description) in converter(&config).registry().describe() {
        println!("  {name}");
        println!("    {description}");
    }
}
