//! File names and defaults shared across the crate

/// Project configuration file, searched for from the current directory upward
pub const CONFIG_FILE: &str = "shadergen.toml";

/// Suffix of generator documents
pub const GENERATOR_SUFFIX: &str = ".gen.toml";

/// Defaults for the `[templates]` and `[output]` sections
pub mod defaults {
    pub const TEMPLATES_DIR: &str = "templates";

    pub const TEMPLATE_EXTENSION: &str = "tmpl";

    pub const OUTPUT_EXTENSION: &str = "shader";
}

/// Variables with a fixed value on export
pub mod constants {
    /// Always resolves to the generator's shader name
    pub const NAME_VARIABLE: &str = "Name";
}
