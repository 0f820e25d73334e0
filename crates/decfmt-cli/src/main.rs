//! decfmt CLI
//!
//! Command-line interface for the decfmt number formatter.

use clap::{Arg, ArgAction, Command};
use decfmt_ast::RoundingMode;
use decfmt_format::{DecimalFormat, DecimalFormatSymbols};
use std::process;

const DEFAULT_PATTERN: &str = "#,##0.###";

fn main() {
    let matches = Command::new("decfmt")
        .version("0.1.0")
        .about("Pattern-driven decimal number formatter")
        .arg(
            Arg::new("pattern")
                .short('p')
                .long("pattern")
                .value_name("PATTERN")
                .help("Format pattern, e.g. '#,##0.00'")
                .num_args(1),
        )
        .arg(
            Arg::new("locale")
                .short('l')
                .long("locale")
                .value_name("TAG")
                .help("Locale tag for symbols, e.g. de or fr-FR")
                .num_args(1),
        )
        .arg(
            Arg::new("rounding")
                .short('r')
                .long("rounding")
                .value_name("MODE")
                .help("Rounding mode: ceiling, floor, down, up, half-even, half-down, half-up")
                .num_args(1),
        )
        .arg(
            Arg::new("parse")
                .long("parse")
                .help("Parse formatted text back into numbers instead of formatting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("FILE")
                .help("Read values from a file, one per line")
                .num_args(1),
        )
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .help("Values to format (or text to parse with --parse)")
                .num_args(0..)
                .allow_negative_numbers(true),
        )
        .get_matches();

    let parse_mode = matches.get_flag("parse");
    let result = build_format(
        matches.get_one::<String>("pattern").map(String::as_str),
        matches.get_one::<String>("locale").map(String::as_str),
        matches.get_one::<String>("rounding").map(String::as_str),
    )
    .and_then(|format| {
        matches.get_one::<String>("file").map_or_else(
            || {
                let values: Vec<String> = matches
                    .get_many::<String>("values")
                    .map(|v| v.cloned().collect())
                    .unwrap_or_default();
                execute_values(&format, &values, parse_mode)
            },
            |file_path| execute_file(&format, file_path, parse_mode),
        )
    });

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn build_format(
    pattern: Option<&str>,
    locale: Option<&str>,
    rounding: Option<&str>,
) -> Result<DecimalFormat, anyhow::Error> {
    let symbols = match locale {
        Some(tag) => DecimalFormatSymbols::for_locale(tag)?,
        None => DecimalFormatSymbols::new(),
    };
    let mut format =
        DecimalFormat::from_pattern_with_symbols(pattern.unwrap_or(DEFAULT_PATTERN), symbols)?;

    if let Some(name) = rounding {
        let mode = RoundingMode::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown rounding mode '{name}'"))?;
        format.set_rounding_mode(mode);
    }
    Ok(format)
}

fn execute_values(
    format: &DecimalFormat,
    values: &[String],
    parse_mode: bool,
) -> Result<i32, anyhow::Error> {
    if values.is_empty() {
        anyhow::bail!("no values given");
    }

    for value in values {
        if parse_mode {
            let number = format.parse(value)?;
            println!("{number}");
        } else {
            let number: f64 = value
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid number '{value}'"))?;
            println!("{}", format.format(number));
        }
    }
    Ok(0)
}

fn execute_file(
    format: &DecimalFormat,
    file_path: &str,
    parse_mode: bool,
) -> Result<i32, anyhow::Error> {
    let content = std::fs::read_to_string(file_path)?;
    let values: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    execute_values(format, &values, parse_mode)
}
