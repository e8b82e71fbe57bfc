#[cfg(test)]
mod tests {
    use stundenreport::api::clockify::{ClockifyConfig, DEFAULT_API_URL};
    use stundenreport::libs::config::{CompanyConfig, Config, DEFAULT_COMPANY_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.clockify.is_none());
        assert!(config.company.is_none());
        assert_eq!(config.company_or_default().name, DEFAULT_COMPANY_NAME);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            clockify: Some(ClockifyConfig {
                api_key: "key-123".to_string(),
                workspace_id: "ws-1".to_string(),
                api_url: DEFAULT_API_URL.to_string(),
            }),
            company: Some(CompanyConfig {
                name: "Acme GmbH".to_string(),
                logo_path: None,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let clockify = loaded.clockify.unwrap();
        assert_eq!(clockify.api_key, "key-123");
        assert_eq!(clockify.workspace_id, "ws-1");
        assert_eq!(loaded.company.unwrap().name, "Acme GmbH");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_key_falls_back_to_environment(_ctx: &mut ConfigTestContext) {
        let config = ClockifyConfig {
            api_key: "".to_string(),
            workspace_id: "ws-1".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        };

        std::env::set_var("CLOCKIFY_API_KEY", "env-key");
        assert_eq!(config.resolve_api_key().unwrap(), "env-key");
        std::env::remove_var("CLOCKIFY_API_KEY");
        assert!(config.resolve_api_key().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_configured_key_wins_over_environment(_ctx: &mut ConfigTestContext) {
        let config = ClockifyConfig {
            api_key: "configured".to_string(),
            workspace_id: "ws-1".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        };
        assert_eq!(config.resolve_api_key().unwrap(), "configured");
    }
}
