    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_level() {
        let mut config = Config::default();
        config.logging.level = "  ".to_string();

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "logging.level"));
    }

    #[test]
    fn test_validate_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(!result.is_valid());
        assert!(result.errors[0].message.contains("verbose"));
    }

    #[test]
    fn test_validate_directive_list() {
        let mut config = Config::default();
        config.logging.level = "servicebox_core=debug,WARN".to_string();

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_validate_bad_directive_in_list() {
        let mut config = Config::default();
        config.logging.level = "info,servicebox_core=loud".to_string();

        let result = ConfigValidator::validate(&config).unwrap();
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_validate_zero_max_files_with_directory() {
        let mut config = Config::default();
        config.logging.directory = Some("/tmp/logs".to_string());
        config.logging.max_files = 0;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "logging.max_files"));
    }

    #[test]
    fn test_validate_zero_max_files_without_directory() {
        let mut config = Config::default();
        config.logging.max_files = 0;

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_validate_empty_directory() {
        let mut config = Config::default();
        config.logging.directory = Some(String::new());

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "logging.directory"));
    }

    #[test]
    fn test_validate_test_env_file_logging_warning() {
        let mut config = Config::default();
        config.profile.environment = Environment::Test;
        config.logging.directory = Some("/tmp/logs".to_string());

        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_methods() {
        let mut result = ValidationResult::default();
        assert!(result.is_valid());

        result.add_warning(ValidationWarning::new("a", "warn"));
        assert!(result.is_valid());

        result.add_error(ValidationError::new("b", "error"));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_ensure_valid_rejects_zero_max_files() {
        let mut config = Config::default();
        config.logging.directory = Some("/tmp/logs".to_string());
        config.logging.max_files = 0;

        let err = ConfigValidator::ensure_valid(&config).unwrap_err();
        match err {
            ConfigError::Invalid(summary) => assert!(summary.contains("logging.max_files")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_ensure_valid_keeps_warnings() {
        let mut config = Config::default();
        config.profile.environment = Environment::Test;
        config.logging.directory = Some("/tmp/logs".to_string());

        let result = ConfigValidator::ensure_valid(&config).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
