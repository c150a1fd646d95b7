//! TOML config file loading and creation.

mod loader;
mod template;


pub use loader::{default_config_path, load, load_from_path, load_or_create, parse_str};
