mod config_mode;
mod export_mode;
mod import_mode;

pub use config_mode::config_mode;
pub use export_mode::export_mode;
pub use import_mode::{ImportArgs, import_mode};
