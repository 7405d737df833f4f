mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{Config, CountConfig, ExcludeConfig, UnreadablePolicy};
pub use validation::{parse_threshold, validate_config};
