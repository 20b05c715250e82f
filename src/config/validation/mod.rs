//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: validators for each configuration section
//! - `tests`: validator test suite

mod config_validators;
mod trait_def;

pub use config_validators::validate_http_url;
pub use trait_def::Validate;
