//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use teamhub_rbac::utils::logging::build_filter;
    use teamhub_rbac::{Config, GatewayError, LoggingConfig, SystemRole};
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "access:\n  system_admin_override: true\n  system_admin_roles: [ADMIN, PROJECT_MANAGER]\n  retain_role_on_fetch_error: false\nlogging:\n  level: debug\n  json: true"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();

        assert!(config.access().is_admin_role(&SystemRole::ProjectManager));
        assert!(!config.access().is_admin_role(&SystemRole::User));
        assert!(!config.access().retain_role_on_fetch_error);
        assert_eq!(config.logging().level, "debug");
        assert!(config.logging().json);
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let result = Config::from_file("/nonexistent/teamhub.yaml").await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_admin_role_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "access:\n  system_admin_roles: [SUPERUSER]").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_env_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TEAMHUB_SYSTEM_ADMIN_OVERRIDE", "off"),
            ("TEAMHUB_LOG_LEVEL", "warn"),
        ]);

        let config =
            Config::from_lookup(|key: &str| vars.get(key).map(|value| value.to_string())).unwrap();

        assert!(!config.access().system_admin_override);
        assert_eq!(config.logging().level, "warn");
    }

    #[test]
    fn test_yaml_round_trip_defaults() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_logging_filter_from_config() {
        let config = LoggingConfig {
            level: "teamhub_rbac=debug,info".to_string(),
            json: false,
        };
        assert!(build_filter(&config).is_ok());
    }
}
