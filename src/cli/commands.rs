//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagmeta")]
#[command(about = "Declarative tag resolution engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Manifest file or directory (default: discover tagmeta.toml upward)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every transitive meta tag of a declaration, in traversal order
    Resolve {
        /// Qualified name of the declaration
        #[arg(value_name = "DECL")]
        decl: String,
    },

    /// Find meta tags of a specific type on a declaration
    Find {
        /// Qualified name of the declaration
        #[arg(value_name = "DECL")]
        decl: String,

        /// Qualified name of the tag type to find
        #[arg(value_name = "TYPE")]
        tag_type: String,

        /// Print every match instead of only the first
        #[arg(short, long)]
        all: bool,
    },

    /// List registered declarations, built-ins included
    List,

    /// Validate the manifest and report unresolved tag types
    Check,
}
