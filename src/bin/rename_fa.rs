//! Sort the contigs of a FASTA file by length, drop unplaced ones, and rename the rest.
//!
//! ```bash
//! # contig_1, contig_2, ... written to stdout
//! rename_fa -f assembly.fa
//!
//! # scaffold_1, scaffold_2, ... written to renamed.fa
//! rename_fa -f assembly.fa -p scaffold -o renamed
//!
//! # names from a two-column TSV, unmatched contigs dropped
//! rename_fa -f assembly.fa -n names.tsv --remove
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use contigsort::*;

#[derive(Parser, Debug)]
#[command(about = "Sort FASTA contigs by length and rename them")]
struct Args {
    /// Input FASTA file
    #[arg(short, long)]
    fasta: Option<PathBuf>,

    /// Prefix for renamed contigs [default: contig]
    #[arg(short, long)]
    prefix: Option<String>,

    /// TSV of contig names formatted as <old_name>\t<new_name>
    #[arg(short, long)]
    names: Option<PathBuf>,

    /// Output base path (".fa" is appended), or "stdout" [default: stdout]
    #[arg(short, long = "out_pre")]
    out_pre: Option<String>,

    /// YAML config file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// With --names, drop contigs missing from the table
    #[arg(long, requires = "names", conflicts_with = "sequential")]
    remove: bool,

    /// With --names, rename contigs missing from the table as <prefix>_<n>
    #[arg(long, requires = "names")]
    sequential: bool,

    /// Keep contigs with "unanchor", "unplace" or "unscaffold" in their name
    #[arg(long)]
    keep_unplaced: bool,

    /// Reverse complement the contig with this input name (repeatable)
    #[arg(long)]
    revcomp: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<(Option<PathBuf>, RenameConfig)> {
        let mut config = match &self.config {
            Some(file) => RenameConfig::from_yaml_file(file)?,
            None => RenameConfig::default(),
        };

        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        if let Some(out_pre) = &self.out_pre {
            config.output = OutputDestination::from_arg(out_pre);
        }
        if self.names.is_some() {
            config.names = self.names;
        }
        if self.remove {
            config.unmatched = UnmatchedPolicy::Remove;
        } else if self.sequential {
            config.unmatched = UnmatchedPolicy::Sequential;
        }
        if self.keep_unplaced {
            config.keep_unplaced = true;
        }
        config.revcomp.extend(self.revcomp);

        Ok((self.fasta, config))
    }
}

fn run(args: Args) -> Result<()> {
    let (fasta, config) = args.into_config()?;
    log::debug!("{:?}", config);

    let contigs = rename_fasta(fasta.as_deref(), &config)?;

    if emit(&contigs, &config.output)?.is_none() {
        log::info!("Wrote {} records to stdout", contigs.len());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_flags_need_names() {
        assert!(Args::try_parse_from(["rename_fa", "-f", "a.fa", "--remove"]).is_err());
        assert!(Args::try_parse_from(["rename_fa", "-f", "a.fa", "--sequential"]).is_err());

        let args = Args::try_parse_from(["rename_fa", "-f", "a.fa", "-n", "t.tsv", "--sequential"]).unwrap();
        let (_, config) = args.into_config().unwrap();
        assert_eq!(config.unmatched, UnmatchedPolicy::Sequential);
    }

    #[test]
    fn original_flag_names() {
        let args = Args::try_parse_from(["rename_fa", "-f", "a.fa", "-p", "chr", "--out_pre", "out"]).unwrap();
        let (fasta, config) = args.into_config().unwrap();
        assert_eq!(fasta, Some(PathBuf::from("a.fa")));
        assert_eq!(config.prefix, "chr");
        assert_eq!(config.output, OutputDestination::File(PathBuf::from("out")));
    }
}
