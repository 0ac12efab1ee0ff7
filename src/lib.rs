pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::toml_profile::TomlProfile;
pub use config::CliConfig;
pub use core::showcase::Showcase;
pub use domain::model::{City, Customer};
pub use domain::ports::ProfileProvider;
pub use utils::error::{LedgerError, Result};
