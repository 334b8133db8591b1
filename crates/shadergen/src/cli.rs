//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shadergen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print progress and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create shadergen.toml and a templates directory here
    Init {
        /// Project name; defaults to the directory name
        #[arg(long)]
        name: Option<String>,
    },

    /// List the conditions, blocks and variables of a template or generated shader
    Scan {
        /// Template or shader file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a template file with values from a TOML file
    Convert {
        /// Template file
        template: PathBuf,

        /// TOML file with [conditions], [variables] and [blocks] tables
        #[arg(long)]
        values: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on names without a value instead of using template defaults
        #[arg(long)]
        strict: bool,
    },

    /// List the templates of the current project
    Templates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a generator document seeded with template defaults
    New {
        /// Shader name (also the generator file name)
        name: String,

        /// Template name; defaults to the first template in the catalog
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Write the shader for a generator document
    Export {
        /// Generator document (*.gen.toml)
        generator: PathBuf,
    },

    /// Copy edited blocks from the generated shader back into its generator
    Pull {
        /// Generator document (*.gen.toml)
        generator: PathBuf,
    },

    /// Export every generator in the project
    Reconvert,
}
