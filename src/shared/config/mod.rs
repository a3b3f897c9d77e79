pub mod global;
pub mod model;

pub use global::install_defaults;
pub use model::{DefaultsConfig, LoggingConfig, Settings, load_settings, load_settings_from};
