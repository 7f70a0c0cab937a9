pub mod config_store;
pub mod path_remover;

pub use config_store::{ConfigStore, CONFIG_FILE_NAME};
pub use path_remover::PathRemover;
