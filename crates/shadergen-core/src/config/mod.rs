pub mod consts;
mod model;

pub use consts::{CONFIG_FILE, GENERATOR_SUFFIX};
pub use model::{Config, OutputConfig, ProjectConfig, TemplatesConfig};
