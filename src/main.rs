mod debug_report;

use boolsift::{Operators, Searcher};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing(config.verbosity);

    let mut searcher = Searcher::new();
    searcher.set_operators(config.and.as_deref(), config.or.as_deref());
    if config.case_sensitive {
        searcher.enable_case_sensitivity();
    }

    if config.explain {
        match searcher.explain(&config.query) {
            Ok(explain) => {
                debug_report::print_explain(&explain, config.color);
                return;
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }

    match filter_stdin(&mut searcher, &config.query) {
        Ok(0) => std::process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Print every stdin line matching `query`; returns how many were printed.
fn filter_stdin(searcher: &mut Searcher, query: &str) -> io::Result<usize> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut printed = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        if searcher.filter(&line, query) {
            writeln!(out, "{line}")?;
            printed += 1;
        }
    }

    out.flush()?;
    Ok(printed)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).with_target(false).with_writer(io::stderr).finish();
    // Only fails if a global subscriber is already set.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

struct CliConfig {
    query: String,
    and: Option<String>,
    or: Option<String>,
    case_sensitive: bool,
    explain: bool,
    color: bool,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut query: Option<String> = None;
    let mut and = None;
    let mut or = None;
    let mut case_sensitive = false;
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut verbosity = 0u8;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("boolsift {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-c" | "--case-sensitive" => case_sensitive = true,
            "--explain" => explain = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--and" => {
                let value = args.next().ok_or_else(|| "error: --and expects a value".to_string())?;
                and = Some(non_empty_token("--and", value)?);
            }
            "--or" => {
                let value = args.next().ok_or_else(|| "error: --or expects a value".to_string())?;
                or = Some(non_empty_token("--or", value)?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                set_query(&mut query, rest)?;
                break;
            }
            _ if arg.starts_with("--and=") => {
                and = Some(non_empty_token("--and", arg.trim_start_matches("--and=").to_string())?);
            }
            _ if arg.starts_with("--or=") => {
                or = Some(non_empty_token("--or", arg.trim_start_matches("--or=").to_string())?);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_query(&mut query, rest)?;
                break;
            }
        }
    }

    let Some(query) = query else {
        return Err(format!("error: no query provided\n\n{}", help_text()));
    };

    Ok(CliConfig { query, and, or, case_sensitive, explain, color, verbosity })
}

fn set_query(query: &mut Option<String>, value: String) -> Result<(), String> {
    if query.is_some() {
        return Err("error: query provided multiple times".to_string());
    }
    *query = Some(value);
    Ok(())
}

fn non_empty_token(flag: &str, value: String) -> Result<String, String> {
    if value.is_empty() {
        return Err(format!("error: {flag} expects a non-empty token"));
    }
    Ok(value)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let defaults = Operators::default();
    format!(
        "boolsift {version}

Filter stdin lines with a boolean search expression.

Usage:
  boolsift [OPTIONS] [--] <query...>

Query syntax:
  Literal terms joined by operator tokens, e.g. \"red && fast || blue\".
  Runs of the same operator are grouped together; each whitespace character
  in a term matches a run of whitespace. An empty query matches every line.

Options:
  --and <token>              AND token. Default: \"{and}\"
  --or <token>               OR token. Default: \"{or}\"
  -c, --case-sensitive       Match letter case exactly.
  --explain                  Print how the query compiles instead of filtering.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, -vv                    Log compilation (debug) and cache hits (trace) to stderr.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  At least one line matched (or --explain succeeded).
  1  No line matched, or an I/O or compilation error.
  2  Invalid arguments or missing query.
",
        version = env!("CARGO_PKG_VERSION"),
        and = defaults.and(),
        or = defaults.or()
    )
}
