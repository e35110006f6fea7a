use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use neurotriage::report::{build_report, render_text};
use neurotriage_schema::decode_cases;

#[derive(Debug, Parser)]
#[command(
    name = "neurotriage",
    version,
    about = "Triage review queue over NeuroCare case exports",
    long_about = "neurotriage reads a case-export JSON file (the backend's\n\
        case-list response) and prints the neurologist review queue:\n\
        cases sorted by urgency tier, with normalized prediction labels\n\
        and confidences.\n\n\
        EXAMPLES:\n\
        \n  neurotriage triage cases.json        Print the review queue\n\
        \n  neurotriage json cases.json          Emit queue and counters as JSON\n\
        \n  curl -s $API/cases | neurotriage triage    Read from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the review queue as text
    Triage(InputArgs),

    /// Emit the review queue and summary counters as JSON
    Json(InputArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Case-export JSON file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn read_cases_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (args, as_json) = match &cli.command {
        Command::Triage(args) => (args, false),
        Command::Json(args) => (args, true),
    };

    let payload = match read_cases_from_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let cases = match decode_cases(&payload) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    log::info!("decoded {} case(s)", cases.len());

    let report = build_report(&cases);
    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", render_text(&report));
    }
    0
}

fn main() {
    std::process::exit(run_cli());
}
