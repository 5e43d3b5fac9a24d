use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// CalorieNinjas API key, sent as the `X-Api-Key` header
    pub calorie_ninja_key: String,

    /// CalorieNinjas API base URL
    #[serde(default = "default_nutrition_api_url")]
    pub nutrition_api_url: String,

    /// Per-request timeout for nutrition lookups, in seconds
    #[serde(default = "default_nutrition_timeout_secs")]
    pub nutrition_timeout_secs: u64,

    /// Path to the recipe CSV dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned when the request does not ask for a count
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Upper bound on the number of recommendations a request may ask for
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
}

fn default_nutrition_api_url() -> String {
    "https://api.calorieninjas.com".to_string()
}

fn default_nutrition_timeout_secs() -> u64 {
    10
}

fn default_dataset_path() -> String {
    "indian_food.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_top_n() -> usize {
    10
}

fn default_max_top_n() -> usize {
    50
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.default_top_n == 0 || config.default_top_n > config.max_top_n {
            anyhow::bail!(
                "DEFAULT_TOP_N must be between 1 and MAX_TOP_N ({}), got {}",
                config.max_top_n,
                config.default_top_n
            );
        }

        Ok(config)
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
