//! chatcmd CLI entry point.

use chatcmd_parser::{CommandHandler, HandlerConfig};
use chatcmd_runtime::{ReaderEditor, Shell, demo_registry, init_logging};
use std::env;
use std::io;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
struct CliConfig {
    namespace: String,
    delimiter: Option<String>,
    arg_pattern: Option<String>,
    leading_delimiter: bool,
    batch_mode: bool,
    list_paths: bool,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            namespace: "bot".to_string(),
            delimiter: None,
            arg_pattern: None,
            leading_delimiter: true,
            batch_mode: false,
            list_paths: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn option_value(
    args: &[String],
    i: usize,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--list" => config.list_paths = true,
            "--no-leading-delimiter" => config.leading_delimiter = false,
            flag @ ("-n" | "--namespace") => {
                i += 1;
                config.namespace = option_value(args, i, flag)?;
            }
            flag @ ("-d" | "--delimiter") => {
                i += 1;
                config.delimiter = Some(option_value(args, i, flag)?);
            }
            flag @ ("-a" | "--arg-pattern") => {
                i += 1;
                config.arg_pattern = Some(option_value(args, i, flag)?);
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn handler_config(config: &CliConfig) -> Result<HandlerConfig, Box<dyn std::error::Error>> {
    let mut handler_config = HandlerConfig::new().with_leading_delimiter(config.leading_delimiter);
    if let Some(delimiter) = &config.delimiter {
        handler_config = handler_config.with_delimiter(delimiter.as_str());
    }
    if let Some(pattern) = &config.arg_pattern {
        handler_config = handler_config.with_argument_pattern(pattern)?;
    }
    Ok(handler_config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("chatcmd {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let handler = CommandHandler::new(
        &config.namespace,
        &demo_registry(),
        handler_config(&config)?,
    );

    if config.list_paths {
        for path in handler.actions().paths() {
            println!("{}{path}", handler.prefix());
        }
        return Ok(());
    }

    if config.batch_mode {
        let editor = ReaderEditor::new(io::stdin().lock());
        Shell::with_editor(editor, handler).without_banner().run()?;
        return Ok(());
    }

    Shell::new(handler)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mchatcmd\x1b[0m - Find and run namespaced commands in chat text

\x1b[1mUSAGE:\x1b[0m
    chatcmd [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help                  Print help information
    -V, --version               Print version information
    -b, --batch                 Read messages from stdin instead of a prompt
    -n, --namespace NAME        Command namespace (default: bot, empty for none)
    -d, --delimiter STR         Path delimiter (default: .)
    -a, --arg-pattern REGEX     Regex separating arguments (default: comma plus one optional space)
        --no-leading-delimiter  Do not follow the namespace with the delimiter
        --list                  List the available commands and exit

\x1b[1mEXAMPLES:\x1b[0m
    chatcmd                                  Start the interactive shell
    echo 'hi bot.math.add(1, 2)' | chatcmd -b
    chatcmd -n '!' --no-leading-delimiter    Commands look like !echo(hi)

\x1b[1mLOGGING:\x1b[0m
    RUST_LOG=chatcmd_parser=trace chatcmd    Trace tokenizer decisions"
    );
}
