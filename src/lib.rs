//! strip-header library for removing a relocated component from page files.
//!
//! When a component moves into a shared layout, every page that imported and
//! rendered it needs the import line and the `<Component />` tag deleted. The
//! workflow has three pieces:
//!
//! 1. **Targets**: the ordered list of files to edit
//! 2. **Rules**: regex substitutions for the import, the tag, and leftover blank lines
//! 3. **Editing**: read each file, rewrite, write back only if something changed
//!
//! # Example
//!
//! ```no_run
//! use strip_header::{editor, rules::Rules, targets};
//! use std::path::Path;
//!
//! let rules = Rules::default_header().unwrap();
//! let paths = targets::resolve(Path::new("."), &[]);
//! let summary = editor::run(&paths, &rules, true, |entry| {
//!     println!("{}: {:?}", entry.path.display(), entry.outcome);
//! })
//! .unwrap();
//!
//! println!("Updated {} files", summary.updated);
//! ```

pub mod cli;
pub mod editor;
pub mod report;
pub mod rules;
pub mod targets;

pub use editor::{Entry, FileEdit, Outcome, Summary};
pub use rules::Rules;
