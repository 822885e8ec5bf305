use clap::{Parser, Subcommand};
use std::path::PathBuf;

use diff_slice::Criteria;

#[derive(Parser)]
#[command(name = "diff-slice")]
#[command(about = "Split unified diff files by content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a diff into the changes matching a pattern and the rest
    Split {
        /// Diff file to split
        input: PathBuf,

        /// Substring to look for in hunk lines (or header lines with --header)
        pattern: String,

        /// Match against header lines instead of hunk content
        #[arg(long)]
        header: bool,

        /// Where to write the matching changes
        #[arg(long, default_value = "matched.diff")]
        matched: PathBuf,

        /// Where to write everything else
        #[arg(long, default_value = "rest.diff")]
        rest: PathBuf,
    },
    /// List the changes in a diff file, one line per change
    List {
        /// Diff file to read
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            pattern,
            header,
            matched,
            rest,
        } => {
            let criteria = if header {
                Criteria::new().change(|change| change.header_contains(&pattern))
            } else {
                Criteria::new().hunk(|hunk| hunk.contains(&pattern))
            };

            let partition = diff_slice::split_file(&input, criteria, &matched, &rest)?;

            println!(
                "{}: {} changes",
                matched.display(),
                partition.matched.changes.len()
            );
            println!(
                "{}: {} changes",
                rest.display(),
                partition.rest.changes.len()
            );
        }
        Commands::List { input } => {
            println!("{}", diff_slice::summarize_file(&input)?);
        }
    }

    Ok(())
}
