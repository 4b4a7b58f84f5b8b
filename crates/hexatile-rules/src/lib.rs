pub mod defaults;
pub mod fingerprint;
pub mod loader;
pub mod validator;

pub use defaults::default_config;
pub use fingerprint::compute_config_hash;
pub use loader::{load_all_configs, load_config_from_str, LoadError};
pub use validator::{validate_config, ValidationError};
