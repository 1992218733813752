//! Command-line interface for clue
//! This binary parses Clue source files and prints the result in one of several formats.
//!
//! Usage:
//!   clue `<path>` [--format `<format>`] [--config `<file>`] [--trace] [--max-depth `<n>`]
//!   clue -                                                   - Read the source from stdin
//!   clue --list-formats                                      - List all available formats

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clue_config::{ClueConfig, ConfigError, Loader};
use clue_parser::clue::diagnostics;
use clue_parser::clue::formats::{Format, FormatError};
use clue_parser::{ClueError, Parser, ParserConfig};
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("clue")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting Clue source files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Clue file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: output.format from the configuration)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .help("Print every grammar production entered to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Maximum expression nesting depth")
                .value_parser(
                    value_parser!(u32).range(1..=ParserConfig::MAX_NESTING_DEPTH_LIMIT as i64),
                ),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    handle_parse_command(path, &config);
}

/// Layer the optional config file and the command-line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<ClueConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("trace") {
        loader = loader.set_override("parser.trace", true)?;
    }
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        loader = loader.set_override("parser.max_nesting_depth", i64::from(*depth))?;
    }
    loader.build()
}

/// Handle the parse command
fn handle_parse_command(path: &str, config: &ClueConfig) {
    let (file_name, source) = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    });

    let format = config.output.format().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    let options = config.render_options();

    let rendered = if format.needs_ast() {
        let mut parser = Parser::with_config(&source, options.parser.clone());
        let result = parser.parse_program();
        for event in parser.trace() {
            eprintln!("{}", event);
        }
        match result {
            Ok(program) => format.render_program(&program, &options),
            Err(err) => Err(FormatError::Clue(err)),
        }
    } else {
        format.render(&source, &options)
    };

    match rendered {
        Ok(output) => {
            print!("{}", output);
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
        }
        Err(FormatError::Clue(err)) => report(&source, &file_name, &err),
        Err(err) => {
            eprintln!("Error formatting output: {}", err);
            process::exit(1);
        }
    }
}

fn report(source: &str, file_name: &str, err: &ClueError) -> ! {
    eprint!("{}", diagnostics::render(source, file_name, err));
    process::exit(1);
}

fn read_source(path: &str) -> std::io::Result<(String, String)> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(("<stdin>".to_string(), source))
    } else {
        Ok((path.to_string(), std::fs::read_to_string(path)?))
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in Format::all() {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
