//! Command-line interface definitions.
//!
//! Every argument is optional: a bare invocation removes `Header` from the
//! built-in page list under the current directory and writes the results.

use crate::rules::{DEFAULT_COMPONENT, DEFAULT_MODULE};
use clap::Parser;
use std::path::PathBuf;

/// Remove a relocated component's import and usage tag from page files.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Files to process, in order. Defaults to the built-in page list.
    pub files: Vec<PathBuf>,

    /// Directory relative file paths are resolved against.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Component whose import and `<Component />` tag are removed.
    #[arg(long, default_value = DEFAULT_COMPONENT)]
    pub component: String,

    /// Module path the component is imported from.
    #[arg(long, default_value = DEFAULT_MODULE)]
    pub module: String,

    /// Layout that now renders the component. Only used in the summary.
    #[arg(long, default_value = "app/layout.tsx")]
    pub layout: String,

    /// Report what would change without writing any file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Emit a JSON summary instead of status lines.
    #[arg(long)]
    pub json: bool,
}
