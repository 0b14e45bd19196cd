use std::path::{Path, PathBuf};

use crate::config::*;
use crate::contigs::*;
use crate::errors::*;
use crate::fasta::*;
use crate::rename_table::*;

pub mod node;
pub use node::*;

/// Chain of stages applied to a whole collection, where each stage is a node.
///
/// Each node consumes the collection produced by the previous one.
pub struct Pipeline {
    nodes: Vec<Box<dyn PipelineNode>>,
}

pub trait PipelineNode {
    fn run(&self, contigs: Contigs) -> Result<Contigs>;
    fn name(&self) -> &'static str;
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build the standard stages: order by length, drop unplaced contigs, then rename.
    ///
    /// Requested reverse complements run first, while the input names are still in place.
    /// The rename table is loaded here when the config names one.
    pub fn from_config(config: &RenameConfig) -> Result<Self> {
        let mut pipeline = Self::new();

        if !config.revcomp.is_empty() {
            pipeline.add(RevCompNode::new(config.revcomp.as_slice()));
        }

        pipeline.add(SortLenNode::new(true));

        if !config.keep_unplaced {
            pipeline.add(DropUnplacedNode::new(config.unplaced_keywords.as_slice()));
        }

        match &config.names {
            Some(names) => {
                let table = RenameTable::from_tsv_file(names)?;
                pipeline.add(TableRenameNode::new(table, config.unmatched, &config.prefix));
            }
            None => {
                pipeline.add(SequentialRenameNode::new(&config.prefix));
            }
        }

        Ok(pipeline)
    }

    /// Add a node to the end of the pipeline.
    pub fn add<N: PipelineNode + 'static>(&mut self, node: N) -> &mut Self {
        self.nodes.push(Box::new(node));
        self
    }

    pub fn node_names(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }

    /// Run every node in order until the final collection is produced.
    pub fn run(&self, mut contigs: Contigs) -> Result<Contigs> {
        for node in &self.nodes {
            let before = contigs.len();
            contigs = node.run(contigs)?;
            log::debug!("{}: {} records in, {} out", node.name(), before, contigs.len());
        }

        Ok(contigs)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the input and run the configured pipeline over it.
///
/// A missing input reference is reported before anything is read.
pub fn rename_fasta(fasta: Option<&Path>, config: &RenameConfig) -> Result<Contigs> {
    let fasta = fasta.ok_or(Error::MissingInput)?;
    let contigs = parse_fasta_file(fasta)?;
    let pipeline = Pipeline::from_config(config)?;
    log::info!("Read {} records from \"{}\"", contigs.len(), fasta.display());

    pipeline.run(contigs)
}

/// Write the final records to standard output or to `<base>.fa`.
///
/// Returns the path written for file sinks.
pub fn emit(contigs: &Contigs, output: &OutputDestination) -> Result<Option<PathBuf>> {
    match output {
        OutputDestination::Stdout => {
            let stdout = std::io::stdout();
            let mut writer = std::io::BufWriter::new(stdout.lock());
            write_fasta(&mut writer, contigs)?;
            Ok(None)
        }
        OutputDestination::File(base) => Ok(Some(write_fasta_file(base, contigs)?)),
    }
}
