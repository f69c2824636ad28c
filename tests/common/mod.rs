#![allow(dead_code)]

use fxsim::domain::operation::OperationInput;
use std::io::Write;

pub const VALID_INI: &str = r#"
[simulation]
day_basis = 365

[defaults]
exchange_rate = 5.0
annual_rate_pct = 12.0
days = 30
principal = 10000.00

[display]
convention = comma
currency_symbol = R$
percent_decimals = 6
"#;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn sample_input() -> OperationInput {
    OperationInput {
        exchange_rate: 5.0,
        annual_rate_pct: 12.0,
        days: 30,
        principal: 10000.0,
    }
}
