//! `clipio` command line front-end.
//!
//! Run with:
//!     echo hello | clipio -i --crlf
//!     clipio -o --lf

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use clipio::{CodePage, Direction, SystemClipboard, TransferConfig, TransferReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Invalid arguments

Usage:
\tclipio -i [--crlf]
\tclipio -o [--lf]
\tclipio -x

Options:
\t-i\t\tSet clipboard from stdin
\t-o\t\tPrint clipboard contents to stdout
\t-x\t\tDelete clipboard
\t--crlf\t\tReplace lone LF bytes with CRLF before setting the clipboard
\t--lf\t\tReplace CRLF with LF before printing to stdout
\t--acp\t\tAssume the ANSI code page (Windows-1252)
\t--oem\t\tAssume the OEM code page (437)
\t--utf8\t\tAssume UTF-8 (default)
\t--strict\tFail on text that cannot be converted
\t-v\t\tIncrease log verbosity (repeatable, RUST_LOG overrides)
";

#[derive(Parser, Debug)]
#[command(name = "clipio", version, about = "Move text between stdio and the clipboard")]
struct Cli {
    /// Set clipboard from stdin
    #[arg(short = 'i', overrides_with_all = ["input", "output", "clear"])]
    input: bool,

    /// Print clipboard contents to stdout
    #[arg(short = 'o', overrides_with_all = ["input", "output", "clear"])]
    output: bool,

    /// Delete clipboard
    #[arg(short = 'x', overrides_with_all = ["input", "output", "clear"])]
    clear: bool,

    /// Replace lone LF bytes with CRLF before setting the clipboard
    #[arg(long, overrides_with = "crlf")]
    crlf: bool,

    /// Replace CRLF with LF before printing to stdout
    #[arg(long, overrides_with = "lf")]
    lf: bool,

    /// Assume the ANSI code page
    #[arg(long, overrides_with_all = ["acp", "oem", "utf8"])]
    acp: bool,

    /// Assume the OEM code page
    #[arg(long, overrides_with_all = ["acp", "oem", "utf8"])]
    oem: bool,

    /// Assume UTF-8 (default)
    #[arg(long, overrides_with_all = ["acp", "oem", "utf8"])]
    utf8: bool,

    /// Fail on text that cannot be converted
    #[arg(long, overrides_with = "strict")]
    strict: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn direction(&self) -> Option<Direction> {
        if self.input {
            Some(Direction::CopyIn)
        } else if self.output {
            Some(Direction::PasteOut)
        } else if self.clear {
            Some(Direction::Clear)
        } else {
            None
        }
    }

    fn code_page(&self) -> CodePage {
        if self.acp {
            CodePage::Ansi
        } else if self.oem {
            CodePage::Oem
        } else {
            CodePage::Utf8
        }
    }

    fn config(&self) -> TransferConfig {
        TransferConfig::new(self.code_page())
            .with_expand_crlf(self.crlf)
            .with_strip_crlf(self.lf)
            .with_strict(self.strict)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(recognized_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprint!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    let Some(direction) = cli.direction() else {
        eprint!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    init_logging(cli.verbose);

    match transfer(&cli, direction) {
        Ok(report) => {
            info!(
                direction = %report.direction,
                bytes = report.bytes,
                units = report.units,
                "transfer complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("clipio: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Drops arguments the command line does not define.
///
/// Unknown options and stray operands are ignored rather than rejected, so
/// `clipio -i --unknown` still copies. The program name is kept.
fn recognized_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let command = Cli::command();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help", "version"])
        .collect();
    let shorts: Vec<char> = command
        .get_arguments()
        .filter_map(|arg| arg.get_short())
        .chain(['h', 'V'])
        .collect();

    let mut args = args.into_iter();
    let program = args.next();

    program
        .into_iter()
        .chain(args.filter(|arg| match arg.to_str() {
            Some(long) if long.starts_with("--") => longs.contains(&&long[2..]),
            Some(short) if short.len() > 1 && short.starts_with('-') => {
                short[1..].chars().all(|c| shorts.contains(&c))
            }
            _ => false,
        }))
        .collect()
}

fn transfer(cli: &Cli, direction: Direction) -> Result<TransferReport> {
    let config = cli.config();
    let mut clipboard = SystemClipboard::new();

    clipio::run(
        direction,
        io::stdin().lock(),
        io::stdout().lock(),
        &mut clipboard,
        &config,
    )
    .with_context(|| format!("{direction} ({}) failed", config.code_page()))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clipio={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
