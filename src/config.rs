use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL").expect("API_BASE_URL must be set"),
            api_key: env::var("API_KEY").unwrap_or_default(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number"),
        }
    }
}
