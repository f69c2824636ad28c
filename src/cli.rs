//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{convention_from_config, validate_simulation_config};
use crate::domain::error::FxsimError;
use crate::domain::formatter::{format_currency, format_decimal, format_percent, NumericConvention};
use crate::domain::interest::DEFAULT_DAY_BASIS;
use crate::domain::number_parser::parse_flexible;
use crate::domain::operation::{convert, OperationInput};
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "fxsim", about = "Currency operation simulator with daily compounding")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate an operation and print the converted final value
    Simulate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Units of the target currency per unit of the source currency
        #[arg(long)]
        exchange_rate: Option<f64>,
        /// Effective annual rate in percent
        #[arg(long)]
        annual_rate: Option<f64>,
        /// Day count of the operation
        #[arg(long)]
        days: Option<i64>,
        /// Principal amount, free-form text in either numeric convention
        #[arg(long)]
        principal: Option<String>,
        /// Days dividing the annual rate (365 calendar, 252 business)
        #[arg(long)]
        day_basis: Option<u32>,
    },
    /// Parse a free-form amount string and print the numeric value
    Parse {
        text: String,
    },
    /// Validate a simulation configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Formatting choices resolved from the `[display]` config section.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub convention: NumericConvention,
    pub currency_symbol: String,
    pub percent_decimals: usize,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            exchange_rate,
            annual_rate,
            days,
            principal,
            day_basis,
        } => run_simulate(
            config.as_ref(),
            exchange_rate,
            annual_rate,
            days,
            principal.as_deref(),
            day_basis,
        ),
        Command::Parse { text } => run_parse(&text),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = FxsimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolve the operation input from CLI overrides, falling back to the
/// `[defaults]` config section for absent flags. The principal is free-form
/// text and goes through the flexible parser.
pub fn build_operation_input(
    config: &dyn ConfigPort,
    exchange_rate: Option<f64>,
    annual_rate: Option<f64>,
    days: Option<i64>,
    principal: Option<&str>,
) -> OperationInput {
    OperationInput {
        exchange_rate: exchange_rate
            .unwrap_or_else(|| config.get_double("defaults", "exchange_rate", 5.0)),
        annual_rate_pct: annual_rate
            .unwrap_or_else(|| config.get_double("defaults", "annual_rate_pct", 12.0)),
        days: days.unwrap_or_else(|| config.get_int("defaults", "days", 30)),
        principal: match principal {
            Some(text) => parse_flexible(text),
            None => config.get_double("defaults", "principal", 10000.0),
        },
    }
}

pub fn resolve_day_basis(day_basis_override: Option<u32>, config: &dyn ConfigPort) -> u32 {
    match day_basis_override {
        Some(basis) => basis,
        None => config.get_int("simulation", "day_basis", DEFAULT_DAY_BASIS as i64) as u32,
    }
}

pub fn display_settings(config: &dyn ConfigPort) -> Result<DisplaySettings, FxsimError> {
    Ok(DisplaySettings {
        convention: convention_from_config(config)?,
        currency_symbol: config
            .get_string("display", "currency_symbol")
            .unwrap_or_else(|| "R$".to_string()),
        percent_decimals: config.get_int("display", "percent_decimals", 6) as usize,
    })
}

fn run_simulate(
    config_path: Option<&PathBuf>,
    exchange_rate: Option<f64>,
    annual_rate: Option<f64>,
    days: Option<i64>,
    principal: Option<&str>,
    day_basis_override: Option<u32>,
) -> ExitCode {
    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            }
        }
        None => match FileConfigAdapter::from_string("") {
            Ok(a) => a,
            Err(reason) => {
                let err = FxsimError::ConfigParse {
                    file: "<empty>".to_string(),
                    reason,
                };
                eprintln!("error: {err}");
                return ExitCode::from(&err);
            }
        },
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let display = match display_settings(&adapter) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let day_basis = resolve_day_basis(day_basis_override, &adapter);
    let input = build_operation_input(&adapter, exchange_rate, annual_rate, days, principal);

    eprintln!(
        "Simulating: principal {} for {} days at {}% a year (basis {})",
        input.principal, input.days, input.annual_rate_pct, day_basis
    );

    let result = match convert(&input, day_basis) {
        Ok(r) => r,
        Err(e) => {
            match &e {
                FxsimError::Validation { violations } => {
                    for violation in violations {
                        eprintln!("error: {violation}");
                    }
                }
                other => eprintln!("error: {other}"),
            }
            return (&e).into();
        }
    };

    let conv = display.convention;
    println!(
        "Daily rate (effective):  {}",
        format_percent(result.daily_rate, display.percent_decimals, conv)
    );
    println!(
        "Compounded principal:    {}",
        format_decimal(result.compounded_principal, 2, conv)
    );
    println!(
        "Exchange rate applied:   {}",
        format_decimal(input.exchange_rate, 4, conv)
    );
    println!(
        "FINAL VALUE: {}",
        format_currency(result.final_value, &display.currency_symbol, conv)
    );

    ExitCode::SUCCESS
}

fn run_parse(text: &str) -> ExitCode {
    let value = parse_flexible(text);
    eprintln!("Raw:    {text:?}");
    println!("{value}");
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    eprintln!("Config validated successfully");
    ExitCode::SUCCESS
}
