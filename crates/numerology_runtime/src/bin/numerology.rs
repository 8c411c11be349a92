//! Numerology CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use numerology_debug::Tracer;
use numerology_engine::ReadingConfig;
use numerology_foundation::{Error, ErrorContext};
use numerology_runtime::{Repl, ReportConfig, Session};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    name: Option<String>,
    birth: Option<String>,
    max_age: Option<u32>,
    year: Option<u32>,
    share: Option<String>,
    save: Option<PathBuf>,
    load: Option<PathBuf>,
    explain: bool,
    no_years: bool,
    plain: bool,
    verbose: bool,
    trace: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e.downcast_ref::<Error>().and_then(|e| e.context.as_ref()) {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn number(args: &[String], i: &mut usize, flag: &str) -> Result<u32, String> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| format!("invalid {flag} value: {raw}"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-n" | "--name" => config.name = Some(value(args, &mut i, "--name")?.to_string()),
            "-b" | "--birth" => config.birth = Some(value(args, &mut i, "--birth")?.to_string()),
            "--max-age" => config.max_age = Some(number(args, &mut i, "--max-age")?),
            "--year" => config.year = Some(number(args, &mut i, "--year")?),
            "--share" => config.share = Some(value(args, &mut i, "--share")?.to_string()),
            "--save" => config.save = Some(PathBuf::from(value(args, &mut i, "--save")?)),
            "--load" => config.load = Some(PathBuf::from(value(args, &mut i, "--load")?)),
            "--explain" => config.explain = true,
            "--no-years" => config.no_years = true,
            "--plain" => config.plain = true,
            "-v" | "--verbose" => config.verbose = true,
            "--trace" => config.trace = true,
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn build_session(config: &CliConfig) -> Session {
    let mut reading = ReadingConfig::new();
    if let Some(max_age) = config.max_age {
        reading = reading.with_max_age(max_age);
    }
    if let Some(year) = config.year {
        reading = reading.with_current_year(year);
    }

    let mut report = ReportConfig::new()
        .with_highlight(!config.plain)
        .with_years(!config.no_years);
    if let Some(base) = &config.share {
        report = report.with_share_base(base.clone());
    }

    let tracer = if config.trace {
        Tracer::to_stderr()
    } else {
        Tracer::disabled()
    };

    Session::new()
        .with_reading_config(reading)
        .with_report_config(report)
        .with_tracer(tracer)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("numerology {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);
    let mut session = build_session(&config);

    if let Some(path) = &config.load {
        session.load(path)?;
        if config.max_age.is_some() || config.year.is_some() {
            session.recompute()?;
        }
    }
    if let Some(name) = &config.name {
        session
            .set_name(name)
            .map_err(|e| e.with_context(ErrorContext::new().with_source("--name")))?;
    }
    if let Some(birth) = &config.birth {
        session
            .set_birth(birth)
            .map_err(|e| e.with_context(ErrorContext::new().with_source("--birth")))?;
    }

    let interactive = config.name.is_none() && config.birth.is_none() && config.load.is_none();
    if interactive {
        let mut repl = Repl::new()?.with_session(session);
        repl.run()?;
        return Ok(());
    }

    print!("{}", session.report()?);
    if config.explain {
        println!();
        for explanation in session.explain_all()? {
            println!("{explanation}");
        }
    }
    if let Some(path) = &config.save {
        session.save(path)?;
        eprintln!("saved to {}", path.display());
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mnumerology\x1b[0m - Numerology readings from a name and birth date

\x1b[1mUSAGE:\x1b[0m
    numerology [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -n, --name NAME      Name in hiragana or lowercase romaji
    -b, --birth DATE     Birth date as YYYY-MM-DD
    --max-age N          Last age in the personal-year table (default 120)
    --year Y             Year treated as the current year
    --share URL          Print a share link with this base URL
    --save PATH          Save the reading (MessagePack)
    --load PATH          Load a saved reading (--max-age and --year recompute it)
    --explain            Show how every core number was computed
    --no-years           Omit the personal-year table
    --plain              Mark emphasised rows with * instead of bold

\x1b[1mDEBUG OPTIONS:\x1b[0m
    -v, --verbose        Log at debug level (RUST_LOG also applies)
    --trace              Print trace events to stderr

\x1b[1mEXAMPLES:\x1b[0m
    numerology                                   Start interactive REPL
    numerology -n たなか -b 1990-01-01           Print a reading
    numerology -n tanaka -b 1990-01-01 --explain Print a reading with workings
    numerology --load reading.msgpack            Show a saved reading

With no name, birth date, or file, the interactive REPL starts."
    );
}
