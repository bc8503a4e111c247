use std::env;
use std::path::PathBuf;

pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("TASKDECK_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            session_file: env::var("TASKDECK_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
        .join("session.json")
}
