use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::PathPrefix;
use crate::typography::Typography;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mailing_list: MailingListSettings,
    pub site: SiteSettings,
    #[serde(default)]
    pub typography: TypographySettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    #[serde(default)]
    pub path_prefix: PathPrefix,
}

#[derive(Deserialize, Clone)]
pub struct MailingListSettings {
    pub endpoint: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_millis: u64,
}

#[derive(Deserialize, Clone)]
pub struct SiteSettings {
    pub title: Vec<String>,
    #[serde(default)]
    pub trust_provider_html: bool,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct TypographySettings {
    pub base_font_size_px: f64,
    pub base_line_height: f64,
    pub scale_ratio: f64,
    pub paragraph_spacing: f64,
    pub primary_color: String,
    pub header_font_family: String,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            base_font_size_px: 18.0,
            base_line_height: 1.63,
            scale_ratio: 2.5,
            paragraph_spacing: 0.7,
            primary_color: "#5f9ea0".into(),
            header_font_family: "Montserrat, sans-serif".into(),
        }
    }
}

impl TypographySettings {
    pub fn build(&self) -> Typography {
        Typography {
            base_font_size_px: self.base_font_size_px,
            base_line_height: self.base_line_height,
            scale_ratio: self.scale_ratio,
            paragraph_spacing: self.paragraph_spacing,
            primary_color: self.primary_color.clone(),
            header_font_family: self.header_font_family.clone(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key_header: String,
    pub api_key: Secret<String>,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
