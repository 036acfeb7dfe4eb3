use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub input_file: String,
    pub output_dir: String,
    pub api_keys: ApiKeySettings,
    pub search: SearchSettings,
    pub harvest: HarvestSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApiKeySettings {
    pub openai: String,
    pub bing: String,
    pub bing_custom_config_id: String,
}

#[derive(Deserialize, Clone)]
pub struct SearchSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub result_count: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub pacing_secs: u64,
}

#[derive(Deserialize, Clone)]
pub struct HarvestSettings {
    pub webdriver_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_wait_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_chunk_chars: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_output_tokens: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub extraction_timeout_secs: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

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

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
