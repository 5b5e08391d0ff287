use std::fmt::Write as _;
use std::io::Write as _;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::error::AppError;
use crate::models::{FieldValue, ModelRecord};
use crate::ymw16::invoker::DEFAULT_TOOL;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Get distance and scattering time from the YMW16 model",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Args {
    #[arg(help = "Galactic longitude of object in degrees")]
    pub gl: f64,
    #[arg(help = "Galactic latitude of object in degrees")]
    pub gb: f64,
    #[arg(help = "DM of object in pc/cm^3")]
    pub dm: f64,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_TOOL,
        help = "YMW16 executable to run"
    )]
    pub tool: String,
    #[arg(long, help = "Print the record as JSON")]
    pub json: bool,
    #[arg(short, long, action = ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    pub verbose: u8,
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    pub quiet: bool,
}

impl Args {
    pub fn log_config(&self) -> LogConfig {
        let level = if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                _ => LevelFilter::Debug,
            }
        };
        LogConfig { level }
    }
}

/// Logger settings derived from the command line. `RUST_LOG` takes precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

pub fn init_logging(config: &LogConfig) -> Result<(), AppError> {
    Builder::new()
        .filter_level(config.level)
        .parse_env(Env::default())
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .try_init()
        .map_err(|source| AppError::InitLogging { source })
}

/// One `<name> <value>` line per field.
pub fn format_text(record: &ModelRecord) -> String {
    let mut s = String::new();
    for (name, value) in record.fields() {
        // writing into a String cannot fail
        let _ = match value {
            FieldValue::Text(t) => writeln!(s, "{:<10} {:<8}", name, t),
            FieldValue::Number(v) => writeln!(s, "{:<10} {:>8}", name, v),
        };
    }
    s
}

pub fn print_output(record: &ModelRecord, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(record)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        print!("{}", format_text(record));
        println!("All done.");
    }

    Ok(())
}
