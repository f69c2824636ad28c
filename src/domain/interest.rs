//! Interest rate conversion and daily compounding.
//!
//! Rates are effective annual rates converted to effective daily rates by
//! geometric equivalence: i_day = (1 + i_year)^(1/basis) - 1.

use crate::domain::error::FxsimError;

/// Calendar-day basis for the annual-to-daily equivalence. Switch to 252
/// via config for a business-day basis.
pub const DEFAULT_DAY_BASIS: u32 = 365;

/// Convert an effective annual rate (as a fraction, 0.12 for 12%) into the
/// equivalent effective daily rate over `day_basis` days.
///
/// The fractional exponent requires a positive base, so `1 + annual_rate`
/// must be greater than zero. Input validation upstream keeps annual rates
/// non-negative, which makes the guard unreachable in normal operation.
pub fn annual_to_daily_rate(annual_rate: f64, day_basis: u32) -> Result<f64, FxsimError> {
    if day_basis == 0 {
        return Err(FxsimError::MathDomain {
            reason: "day basis must be at least 1".to_string(),
        });
    }
    let base = 1.0 + annual_rate;
    if base <= 0.0 {
        return Err(FxsimError::MathDomain {
            reason: format!("cannot take fractional power of non-positive base {base}"),
        });
    }
    Ok(base.powf(1.0 / day_basis as f64) - 1.0)
}

/// Daily-compounded amount: principal * (1 + daily_rate)^days.
///
/// `days = 0` returns the principal unchanged.
pub fn compound(principal: f64, daily_rate: f64, days: u32) -> f64 {
    principal * (1.0 + daily_rate).powf(f64::from(days))
}
