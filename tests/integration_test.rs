//! Integration tests for the full simulation pipeline.
//!
//! Tests cover:
//! - Config file to formatted result, end to end
//! - Exhaustive validation: all violations reported, no partial results
//! - Day basis variants (365 calendar, 252 business)
//! - Format-then-parse round trips under both numeric conventions

mod common;

use approx::assert_relative_eq;
use common::*;
use fxsim::adapters::file_config_adapter::FileConfigAdapter;
use fxsim::cli;
use fxsim::domain::error::FxsimError;
use fxsim::domain::formatter::{
    format_currency, format_decimal, format_percent, NumericConvention,
};
use fxsim::domain::number_parser::parse_flexible;
use fxsim::domain::operation::{convert, OperationInput};
use proptest::prelude::*;

mod full_pipeline {
    use super::*;

    #[test]
    fn config_to_formatted_result() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let day_basis = cli::resolve_day_basis(None, &adapter);
        let display = cli::display_settings(&adapter).unwrap();
        let input = cli::build_operation_input(&adapter, None, None, None, None);

        let result = convert(&input, day_basis).unwrap();

        assert_relative_eq!(result.daily_rate, 0.00031053776, epsilon = 1e-9);
        assert_relative_eq!(result.compounded_principal, 10093.582, epsilon = 1e-2);
        assert_relative_eq!(result.final_value, 50467.910, epsilon = 5e-2);

        let daily = format_percent(result.daily_rate, display.percent_decimals, display.convention);
        assert_eq!(daily, "0,031054%");

        let final_line = format_currency(
            result.final_value,
            &display.currency_symbol,
            display.convention,
        );
        assert!(final_line.starts_with("R$ 50.467,9"), "got {final_line}");
    }

    #[test]
    fn free_form_principal_feeds_the_pipeline() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let input = cli::build_operation_input(&adapter, None, None, None, Some("10.000,00"));
        assert_eq!(input.principal, 10000.0);

        let result = convert(&input, 365).unwrap();
        assert_relative_eq!(result.compounded_principal, 10093.582, epsilon = 1e-2);
    }

    #[test]
    fn mistyped_principal_becomes_zero_and_fails_validation() {
        // The parser's silent zero fallback surfaces here as a validation
        // failure, never as a parse error.
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let input = cli::build_operation_input(&adapter, None, None, None, Some("oops"));
        assert_eq!(input.principal, 0.0);

        let err = convert(&input, 365).unwrap_err();
        match err {
            FxsimError::Validation { violations } => {
                assert_eq!(violations, vec!["principal must be greater than zero"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn business_day_basis_changes_the_daily_rate() {
        let input = sample_input();
        let calendar = convert(&input, 365).unwrap();
        let business = convert(&input, 252).unwrap();
        assert!(business.daily_rate > calendar.daily_rate);
        assert!(business.compounded_principal > calendar.compounded_principal);
    }

    #[test]
    fn zero_day_operation_only_converts() {
        let input = OperationInput {
            days: 0,
            ..sample_input()
        };
        let result = convert(&input, 365).unwrap();
        assert_eq!(result.compounded_principal, 10000.0);
        assert_eq!(result.final_value, 50000.0);
    }
}

mod exhaustive_validation {
    use super::*;

    #[test]
    fn all_four_violations_reported_together() {
        let input = OperationInput {
            exchange_rate: 0.0,
            annual_rate_pct: -1.0,
            days: -5,
            principal: 0.0,
        };
        let err = convert(&input, 365).unwrap_err();
        let violations = match err {
            FxsimError::Validation { violations } => violations,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(violations.len(), 4);
        // One distinct message per violated constraint.
        let unique: std::collections::HashSet<_> = violations.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn no_partial_result_on_violation() {
        let input = OperationInput {
            principal: -1.0,
            ..sample_input()
        };
        assert!(convert(&input, 365).is_err());
    }
}

mod round_trip {
    use super::*;

    proptest! {
        #[test]
        fn format_then_parse_recovers_value_decimal_comma(value in 0.0..1_000_000_000.0f64) {
            let rendered = format_decimal(value, 2, NumericConvention::DecimalComma);
            let parsed = parse_flexible(&rendered);
            prop_assert!(
                (parsed - value).abs() <= 0.0051,
                "{value} -> {rendered} -> {parsed}"
            );
        }

        #[test]
        fn format_then_parse_recovers_value_decimal_point(value in 0.0..1_000_000_000.0f64) {
            let rendered = format_decimal(value, 2, NumericConvention::DecimalPoint);
            let parsed = parse_flexible(&rendered);
            prop_assert!(
                (parsed - value).abs() <= 0.0051,
                "{value} -> {rendered} -> {parsed}"
            );
        }

        #[test]
        fn parser_never_panics(text in "\\PC*") {
            let _ = parse_flexible(&text);
        }
    }

    #[test]
    fn round_trip_pinned_examples() {
        for (value, convention) in [
            (10000.0, NumericConvention::DecimalComma),
            (10000.0, NumericConvention::DecimalPoint),
            (1234567.89, NumericConvention::DecimalComma),
            (1234567.89, NumericConvention::DecimalPoint),
            (0.25, NumericConvention::DecimalComma),
        ] {
            let rendered = format_decimal(value, 2, convention);
            assert_eq!(parse_flexible(&rendered), value, "via {rendered}");
        }
    }
}
