//! strip-header: remove a component's import and usage tag from page files
//! once the component lives in the global layout.

use anyhow::Result;
use clap::Parser;
use strip_header::cli::Args;
use strip_header::rules::Rules;
use strip_header::{editor, report, targets};

fn main() -> Result<()> {
    let args = Args::parse();

    let rules = Rules::new(&args.component, &args.module)?;
    let paths = targets::resolve(&args.root, &args.files);
    let write = !args.dry_run;

    if args.json {
        let summary = editor::run(&paths, &rules, write, |_| {})?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    report::print_banner(&args.component, paths.len());
    let summary = editor::run(&paths, &rules, write, |entry| {
        report::print_entry(entry, write)
    })?;
    report::print_summary(&summary, &args.component, &args.layout);

    Ok(())
}
