//! Rust library for tidying up genome assembly FASTA files.
//!
//! # Overview
//! contigsort loads every record of a FASTA file into memory, orders the contigs by length,
//! drops the ones that were never placed on a chromosome or scaffold, and gives the rest
//! new names.
//!
//! This is useful for:
//! * Renaming assembler output (`ptg000001l`, `scaffold_17|arrow`, ...) to `contig_1..N`
//! * Making contig numbers reflect size rank
//! * Applying a curated old-to-new name table
//!
//! ## Record structure
//! Here's an example FASTA record:
//! ```text
//! >ctg3
//! GGGG
//! GG
//! ```
//! It is stored as a [`Contig`] named `ctg3` with the sequence `GGGGGG`. Sequence lines are
//! joined, and the record is written back with its whole sequence on one line.
//!
//! ## Pipeline
//! A [`Pipeline`] is a chain of nodes, each consuming the whole [`Contigs`] collection produced
//! by the previous one. [`Pipeline::from_config`] builds the standard chain:
//! 1. [`SortLenNode`]: longest first, ties keep their input order.
//! 2. [`DropUnplacedNode`]: drop names containing `unanchor`, `unplace` or `unscaffold`.
//! 3. [`SequentialRenameNode`] (`<prefix>_1`, `<prefix>_2`, ...) or, when a rename table is
//!    given, [`TableRenameNode`].
//!
//! ```
//! use contigsort::*;
//!
//! let contigs = parse_fasta_str(">ctg1\nAAAA\n>ctg2_unplaced\nCC\n>ctg3\nGGGGGG\n");
//! let config = RenameConfig { prefix: "scaffold".to_owned(), ..Default::default() };
//! let contigs = Pipeline::from_config(&config).unwrap().run(contigs).unwrap();
//! assert_eq!(to_fasta_string(&contigs), ">scaffold_1\nGGGGGG\n>scaffold_2\nAAAA\n");
//! ```

pub mod config;
pub mod contig;
pub mod contigs;
pub mod errors;
pub mod fasta;
pub mod pipeline;
pub mod rename_table;

// commonly used functions and types

pub use crate::config::*;
pub use crate::contig::*;
pub use crate::contigs::*;
pub use crate::errors::*;
pub use crate::fasta::*;
pub use crate::pipeline::*;
pub use crate::rename_table::*;
