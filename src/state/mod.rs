pub mod app_settings;
pub mod cutoff;
pub mod messages;
pub mod network;
pub mod refresher;
