use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Environment variables read verbatim, without a prefix.
const RAW_ENV_KEYS: &[&str] = &["port", "host", "sns_topic_arn", "aws_region", "sns_endpoint_url"];
/// Prefix for every other setting, nested with `__`.
const ENV_PREFIX: &str = "SRE_DEMO_";

/// Main server configuration.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Topic receiving the visit alert. Unset disables notifications.
    pub sns_topic_arn: Option<String>,
    pub aws_region: String,
    /// Overrides the SNS endpoint, e.g. for LocalStack.
    pub sns_endpoint_url: Option<String>,
    pub notify: NotifyConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            sns_topic_arn: None,
            aws_region: "us-east-1".to_string(),
            sns_endpoint_url: None,
            notify: NotifyConfig::default(),
            features: FeaturesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The layered configuration sources: defaults, `./config.yaml`, then environment.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file("./config.yaml"))
            .merge(Env::raw().only(RAW_ENV_KEYS))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

/// Visit alert settings.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct NotifyConfig {
    /// Visit count that fires the alert, exactly once per count-up.
    pub threshold: u64,
    pub timeout_in_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            threshold: 10,
            timeout_in_ms: 5000,
        }
    }
}

/// Optional capabilities of the dashboard.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct FeaturesConfig {
    pub reset_enabled: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        FeaturesConfig {
            reset_enabled: true,
        }
    }
}

/// Load the configuration, exiting the process if it cannot be extracted.
pub fn load_config() -> AppConfig {
    match AppConfig::figment().extract::<AppConfig>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(AppConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing schema: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: AppConfig = AppConfig::figment().extract()?;
            assert_eq!(config.port, 3000);
            assert_eq!(config.bind_address(), "0.0.0.0:3000");
            assert_eq!(config.aws_region, "us-east-1");
            assert!(config.sns_topic_arn.is_none());
            assert_eq!(config.notify.threshold, 10);
            assert!(config.features.reset_enabled);
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }

    #[test]
    fn raw_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8080");
            jail.set_env("SNS_TOPIC_ARN", "arn:aws:sns:eu-west-1:123456789012:demo");
            jail.set_env("AWS_REGION", "eu-west-1");
            let config: AppConfig = AppConfig::figment().extract()?;
            assert_eq!(config.port, 8080);
            assert_eq!(
                config.sns_topic_arn.as_deref(),
                Some("arn:aws:sns:eu-west-1:123456789012:demo")
            );
            assert_eq!(config.aws_region, "eu-west-1");
            Ok(())
        });
    }

    #[test]
    fn yaml_then_prefixed_env_layering() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.yaml",
                r#"
port: 9000
features:
  reset_enabled: false
logging:
  level: debug
  format: json
"#,
            )?;
            jail.set_env("SRE_DEMO_LOGGING__LEVEL", "warn");
            jail.set_env("SRE_DEMO_NOTIFY__THRESHOLD", "3");
            let config: AppConfig = AppConfig::figment().extract()?;
            assert_eq!(config.port, 9000);
            assert!(!config.features.reset_enabled);
            assert_eq!(config.logging.format, "json");
            assert_eq!(config.logging.level, "warn");
            assert_eq!(config.notify.threshold, 3);
            assert_eq!(config.notify.timeout_in_ms, 5000);
            Ok(())
        });
    }
}
