//! Operation input, validation and the conversion pipeline.

use crate::domain::error::FxsimError;
use crate::domain::interest::{annual_to_daily_rate, compound};

/// The four fields of a simulated operation, as collected from the caller.
///
/// `days` is signed so that out-of-range user input can be carried into
/// validation instead of being rejected at the type boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationInput {
    /// Units of the target currency per unit of the source currency.
    pub exchange_rate: f64,
    /// Effective annual rate in percent (12.0 means 12% a year).
    pub annual_rate_pct: f64,
    /// Number of calendar days the operation runs.
    pub days: i64,
    /// Principal in the source currency.
    pub principal: f64,
}

/// Result of a simulated operation. Derived deterministically from an
/// [`OperationInput`]; immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    /// Effective daily rate as a fraction.
    pub daily_rate: f64,
    /// Principal after daily compounding, still in the source currency.
    pub compounded_principal: f64,
    /// Compounded principal converted at the exchange rate.
    pub final_value: f64,
}

impl OperationInput {
    /// Check every business rule and collect one message per violation.
    /// Returns all violations, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();
        if self.exchange_rate <= 0.0 || self.exchange_rate.is_nan() {
            violations.push("exchange rate must be greater than zero".to_string());
        }
        if self.annual_rate_pct < 0.0 || self.annual_rate_pct.is_nan() {
            violations.push("annual rate must not be negative".to_string());
        }
        if self.days < 0 {
            violations.push("day count must not be negative".to_string());
        } else if self.days > i64::from(u32::MAX) {
            violations.push("day count is too large".to_string());
        }
        if self.principal <= 0.0 || self.principal.is_nan() {
            violations.push("principal must be greater than zero".to_string());
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Run the full conversion: validate, derive the daily rate, compound the
/// principal, convert at the exchange rate.
///
/// No computation happens unless every input field passes validation.
pub fn convert(input: &OperationInput, day_basis: u32) -> Result<OperationResult, FxsimError> {
    input
        .validate()
        .map_err(|violations| FxsimError::Validation { violations })?;

    let daily_rate = annual_to_daily_rate(input.annual_rate_pct / 100.0, day_basis)?;
    let compounded_principal = compound(input.principal, daily_rate, input.days as u32);
    let final_value = compounded_principal * input.exchange_rate;

    Ok(OperationResult {
        daily_rate,
        compounded_principal,
        final_value,
    })
}
