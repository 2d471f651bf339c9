pub mod cli_settings;
pub mod setup;
pub mod slot;
pub mod week;
