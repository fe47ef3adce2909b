use log::Level;

pub const SITE_JSON: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
