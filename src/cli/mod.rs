//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_check_report, format_declaration_list, format_tag, format_tag_list};
