use anyhow::{Context, Result};
use clap::Parser;
use sidegen::{sidebar, tree::TreeBuilder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sidegen")]
#[command(about = "Generate a docsify _sidebar.md index from a directory tree", long_about = None)]
struct Args {
    /// Directory to scan for documentation pages
    #[arg(value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Where to write the generated sidebar
    #[arg(long, short = 'o', value_name = "FILE", default_value = "_sidebar.md")]
    output: PathBuf,

    /// Sort entries by file name instead of directory order
    #[arg(long)]
    sorted: bool,

    /// Also write the scanned tree as pretty JSON
    #[arg(long, value_name = "FILE")]
    dump_tree: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tree = TreeBuilder::new()
        .sorted(args.sorted)
        .ingest_dir(&args.root)
        .with_context(|| format!("failed to scan {}", args.root.display()))?
        .build();

    println!(
        "✓ Scanned {} directories, {} files",
        tree.dir_count(),
        tree.file_count()
    );

    let content = sidebar::render(&tree);
    sidebar::write_file(&args.output, &content)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if let Some(dump_path) = args.dump_tree {
        let json = serde_json::to_string_pretty(tree.children())
            .context("failed to serialize scanned tree")?;
        sidebar::write_file(&dump_path, &json)
            .with_context(|| format!("failed to write {}", dump_path.display()))?;
    }

    println!("{} generated successfully", args.output.display());

    Ok(())
}
