use std::env;
use std::sync::LazyLock;

use secrecy::SecretString;
use types::{Result, err};
use url::Url;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("failed to load configuration from environment")
});

#[derive(Clone)]
pub struct Config {
    /// Base URL of the record-storage service.
    pub api_url: Url,
    pub api_token: SecretString,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: Url::parse(&env_var("KURSMANAGER_API_URL")?)?,
            api_token: env_var("KURSMANAGER_API_TOKEN")?.into(),
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| err!("missing environment variable: {}", name))
}
