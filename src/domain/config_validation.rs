//! Configuration validation.
//!
//! Validates all config fields before a simulation runs.

use crate::domain::error::FxsimError;
use crate::domain::formatter::NumericConvention;
use crate::ports::config_port::ConfigPort;

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    validate_day_basis(config)?;
    validate_default_exchange_rate(config)?;
    validate_default_annual_rate(config)?;
    validate_default_days(config)?;
    validate_default_principal(config)?;
    validate_convention(config)?;
    validate_percent_decimals(config)?;
    Ok(())
}

/// Parse the `[display] convention` key. Absent defaults to decimal-comma,
/// matching the result display of the original simulator.
pub fn convention_from_config(config: &dyn ConfigPort) -> Result<NumericConvention, FxsimError> {
    match config.get_string("display", "convention").as_deref() {
        None | Some("comma") => Ok(NumericConvention::DecimalComma),
        Some("point") => Ok(NumericConvention::DecimalPoint),
        Some(other) => Err(FxsimError::ConfigInvalid {
            section: "display".to_string(),
            key: "convention".to_string(),
            reason: format!("unknown convention {other:?}, expected comma or point"),
        }),
    }
}

fn validate_day_basis(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_int("simulation", "day_basis", 365);
    if value < 1 {
        return Err(FxsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "day_basis".to_string(),
            reason: "day_basis must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_default_exchange_rate(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_double("defaults", "exchange_rate", 5.0);
    if value <= 0.0 {
        return Err(FxsimError::ConfigInvalid {
            section: "defaults".to_string(),
            key: "exchange_rate".to_string(),
            reason: "exchange_rate must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_default_annual_rate(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_double("defaults", "annual_rate_pct", 12.0);
    if value < 0.0 {
        return Err(FxsimError::ConfigInvalid {
            section: "defaults".to_string(),
            key: "annual_rate_pct".to_string(),
            reason: "annual_rate_pct must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_default_days(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_int("defaults", "days", 30);
    if value < 0 {
        return Err(FxsimError::ConfigInvalid {
            section: "defaults".to_string(),
            key: "days".to_string(),
            reason: "days must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_default_principal(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_double("defaults", "principal", 10000.0);
    if value <= 0.0 {
        return Err(FxsimError::ConfigInvalid {
            section: "defaults".to_string(),
            key: "principal".to_string(),
            reason: "principal must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_convention(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    convention_from_config(config).map(|_| ())
}

fn validate_percent_decimals(config: &dyn ConfigPort) -> Result<(), FxsimError> {
    let value = config.get_int("display", "percent_decimals", 6);
    if !(0..=12).contains(&value) {
        return Err(FxsimError::ConfigInvalid {
            section: "display".to_string(),
            key: "percent_decimals".to_string(),
            reason: "percent_decimals must be between 0 and 12".to_string(),
        });
    }
    Ok(())
}
