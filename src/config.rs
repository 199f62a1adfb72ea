use log::Level;

pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn get_gemini_url() -> &'static str {
    "https://generativelanguage.googleapis.com/v1beta/models"
}

/// Key baked in at build time, e.g. `API_KEY=... trunk build --release`.
pub fn get_api_key() -> Option<&'static str> {
    option_env!("API_KEY").filter(|key| !key.trim().is_empty())
}
