use lazy_static::lazy_static;
use serde::Serialize;

use std::fmt;

lazy_static! {
    /// Complement of every byte, with unsupported bytes mapping to themselves.
    pub static ref COMPLEMENT: [u8; 256] = {
        let mut comp = [0; 256];

        for (v, a) in comp.iter_mut().enumerate() {
            *a = v as u8;
        }

        // IUPAC DNA alphabet
        for (&a, &b) in b"AGCTYRWSKMDVHBN".iter().zip(b"TCGARYWSMKHBDVN".iter()) {
            comp[a as usize] = b; // upper case
            comp[a as usize + 32] = b + 32; // lower case
        }

        comp
    };
}

/// Complement a single character, passing through anything outside the table.
pub fn complement(c: char) -> char {
    if c.is_ascii() {
        COMPLEMENT[c as usize] as char
    } else {
        c
    }
}

/// A named sequence parsed from a FASTA record.
///
/// The length is always derived from the sequence, so it cannot drift out of sync
/// when the sequence is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contig {
    name: String,
    seq: String,
}

/// Borrowed, serializable view of a [`Contig`] with the keys `name`, `seq` and `length`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ContigRecord<'a> {
    pub name: &'a str,
    pub seq: &'a str,
    pub length: usize,
}

impl Contig {
    /// No validation of the character set is performed.
    pub fn new(name: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }

    /// Number of characters in the sequence.
    pub fn len(&self) -> usize {
        self.seq.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Complement every character, then reverse the whole sequence in place.
    pub fn revcomp(&mut self) {
        self.seq = self.seq.chars().rev().map(complement).collect();
    }

    /// Header line followed by the whole sequence on a single line, without a trailing newline.
    pub fn dump(&self) -> String {
        format!(">{}\n{}", self.name, self.seq)
    }

    pub fn to_structured(&self) -> ContigRecord<'_> {
        ContigRecord {
            name: &self.name,
            seq: &self.seq,
            length: self.len(),
        }
    }
}

impl fmt::Display for Contig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Contig name: {}\nContig length: {}.", self.name, self.len())
    }
}
