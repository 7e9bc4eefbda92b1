//! Tests for error reporting on the configuration surface
//!
//! Covers message wording, the filter name accessor, and how errors
//! surface from the registry, factories and analyzer configuration.

#[cfg(test)]
mod tests {
    use crate::error::AnalysisError;
    use crate::factory::{Analyzer, AnalyzerConfig, FilterArgs, FilterRegistry, FilterSpec};
    use crate::stemmer::StemAlternator;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::UnknownFilter {
            name: "snowball".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown filter 'snowball'");

        let err = AnalysisError::DuplicateFilter {
            name: "latinStem".to_string(),
        };
        assert_eq!(err.to_string(), "Filter 'latinStem' is already registered");

        let err = AnalysisError::InvalidParameter {
            filter: "latinNumberConvert".to_string(),
            parameter: "strictMode".to_string(),
            value: "maybe".to_string(),
            expected: "true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'maybe' for parameter 'strictMode' of filter 'latinNumberConvert': expected true or false"
        );

        let err = AnalysisError::UnknownParameters {
            filter: "latinStem".to_string(),
            names: vec!["language".to_string(), "strictMode".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown parameters for filter 'latinStem': language, strictMode"
        );
    }

    #[test]
    fn test_filter_name_accessor() {
        let err = AnalysisError::UnknownParameters {
            filter: "latinStem".to_string(),
            names: vec!["x".to_string()],
        };
        assert_eq!(err.filter_name(), Some("latinStem"));
        assert!(err.is_config_error());

        let err = AnalysisError::ReadingsPending {
            word: "filius".to_string(),
        };
        assert_eq!(err.filter_name(), None);
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_unknown_filter_in_config() {
        let config = AnalyzerConfig::new()
            .with_filter(FilterSpec::new("latinStem"))
            .with_filter(FilterSpec::new("greekStem"));
        let err = Analyzer::from_config(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownFilter { ref name } if name == "greekStem"));
        assert_eq!(err.filter_name(), Some("greekStem"));
    }

    #[test]
    fn test_arguments_to_argumentless_filter() {
        let registry = FilterRegistry::new();
        let err = registry
            .create(
                "latinNumberNormalization",
                FilterArgs::new().with("strictMode", "true"),
            )
            .unwrap_err();
        match err {
            AnalysisError::UnknownParameters { filter, names } => {
                assert_eq!(filter, "latinNumberNormalization");
                assert_eq!(names, vec!["strictMode"]);
            }
            other => panic!("Expected UnknownParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_strict_mode_value() {
        let config = AnalyzerConfig::from_json_str(
            r#"{ "filters": [ { "name": "latinNumberConvert", "args": { "strictMode": "1" } } ] }"#,
        )
        .unwrap();
        let err = Analyzer::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("strictMode"));
        assert!(err.to_string().contains("'1'"));
    }

    #[test]
    fn test_malformed_json_config() {
        let err = AnalyzerConfig::from_json_str(r#"{ "filters": [ { "args": {} } ] }"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));

        let err = AnalyzerConfig::from_json_str("{ filters: ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_non_string_argument_is_config_error() {
        let err = AnalyzerConfig::from_json_str(
            r#"{ "filters": [ { "name": "latinNumberConvert", "args": { "strictMode": true } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_readings_pending_message() {
        let mut alternator = StemAlternator::new();
        alternator.begin("rosa").unwrap();
        let err = alternator.begin("rosae").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot start stemming 'rosae' while readings of the previous word are pending"
        );
    }
}
