use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("PAWFECT_BIND_ADDR", "0.0.0.0:5000"),
        static_dir: get_env_or_default("PAWFECT_STATIC_DIR", "static"),
        api_url: get_env_or_default("PAWFECT_API_URL", "http://127.0.0.1:5000"),
    }
});

pub struct Config {
    pub bind_addr: String,
    pub static_dir: String,
    pub api_url: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
