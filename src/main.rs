mod diff;
mod splice;
mod vue_file;

use std::{io, path::PathBuf, process};

use clap::Parser;

/// Regenerate a Vue single-file component by splicing its script block into a
/// hand-authored replacement template/style block.
#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Cli {
    /// The component to extract the script block from
    #[arg(short, long, default_value = "frontend/src/views/AdminDashboard.vue")]
    source: PathBuf,

    /// Where to write the reassembled component
    #[arg(short, long, default_value = "frontend/src/views/AdminDashboard_new.vue")]
    output: PathBuf,

    /// Marker opening the extracted region
    #[arg(long, default_value = splice::DEFAULT_OPEN)]
    open: String,

    /// Marker closing the extracted region
    #[arg(long, default_value = splice::DEFAULT_CLOSE)]
    close: String,

    /// Print a diff against the current output file instead of writing
    #[arg(long)]
    diff: bool,
}

fn run(args: Cli) -> io::Result<()> {
    let source = vue_file::File::at_path(args.source)?;

    // markers are escaped, so the region pattern always compiles
    let region = splice::region_regex(&args.open, &args.close).unwrap();

    let Some(block) = splice::extract_region(&region, &source.content) else {
        println!(
            "Could not find {} block in {}!",
            args.open,
            source.path.display()
        );
        process::exit(1);
    };

    let rendered = splice::splice(block, splice::REPLACEMENT);

    if args.diff {
        let current = vue_file::File::at_path_or_empty(args.output)?;
        print!("{}", diff::render(&current.content, &rendered));
        return Ok(());
    }

    vue_file::atomic_overwrite(&args.output, &rendered)?;
    println!("Done generating {}", args.output.display());
    Ok(())
}

fn main() {
    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
