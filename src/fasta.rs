use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::contig::*;
use crate::contigs::*;
use crate::errors::*;

/// Extension appended to the base name of file sinks.
pub const FASTA_EXT: &str = "fa";

/// Accumulates lines into records.
///
/// A header only closes the in-progress record once some sequence has been seen, so two
/// adjacent headers collapse into the second one.
#[derive(Default)]
struct FastaParser {
    name: String,
    seq: String,
    contigs: Vec<Contig>,
}

impl FastaParser {
    fn push_line(&mut self, line: &str) {
        let line = line.trim();

        if line.starts_with('>') {
            if !self.seq.is_empty() {
                let name = std::mem::take(&mut self.name);
                let seq = std::mem::take(&mut self.seq);
                self.contigs.push(Contig::new(name, seq));
            }
            self.name.clear();
            self.name.push_str(line.trim_start_matches('>'));
        } else {
            self.seq.push_str(line);
        }
    }

    fn finish(mut self) -> Contigs {
        // the last record is always emitted, even with an empty sequence
        self.contigs.push(Contig::new(self.name, self.seq));
        Contigs::new(self.contigs)
    }
}

/// Parse FASTA text that is already in memory.
pub fn parse_fasta_str(text: &str) -> Contigs {
    let mut parser = FastaParser::default();
    text.lines().for_each(|l| parser.push_line(l));
    parser.finish()
}

/// Parse FASTA records line by line from a reader.
pub fn parse_fasta_reader<R: BufRead>(mut reader: R) -> std::io::Result<Contigs> {
    let mut parser = FastaParser::default();
    let mut line = String::new();

    while reader.read_line(&mut line)? > 0 {
        parser.push_line(&line);
        line.clear();
    }

    Ok(parser.finish())
}

/// Parse a FASTA file.
///
/// Fails with [`Error::InputNotFound`] before any parsing if the path is not a regular file
/// or cannot be opened.
pub fn parse_fasta_file(file: impl AsRef<Path>) -> Result<Contigs> {
    let file = file.as_ref();
    let not_found = || Error::InputNotFound {
        file: file.display().to_string(),
    };

    if !file.is_file() {
        return Err(not_found());
    }

    let reader = BufReader::new(File::open(file).map_err(|_| not_found())?);
    let contigs = parse_fasta_reader(reader).map_err(|e| Error::file_io(file, e))?;

    log::debug!("Parsed {} records from \"{}\"", contigs.len(), file.display());
    Ok(contigs)
}

pub fn write_fasta_record(writer: &mut dyn Write, contig: &Contig) -> std::io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(contig.name().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(contig.seq().as_bytes())?;
    writer.write_all(b"\n")
}

/// Write every record in order, each block terminated by a line break.
pub fn write_fasta(writer: &mut dyn Write, contigs: &Contigs) -> std::io::Result<()> {
    for contig in contigs.iter() {
        write_fasta_record(writer, contig)?;
    }
    writer.flush()
}

/// Path of the file sink for a base name, e.g. `out/asm` becomes `out/asm.fa`.
pub fn fasta_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path = base.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(FASTA_EXT);
    PathBuf::from(path)
}

/// Write records to `<base>.fa` and return the path written.
///
/// The file is closed before returning on every path.
pub fn write_fasta_file(base: impl AsRef<Path>, contigs: &Contigs) -> Result<PathBuf> {
    let path = fasta_path(base);
    let mut writer = BufWriter::new(File::create(&path).map_err(|e| Error::file_io(&path, e))?);
    write_fasta(&mut writer, contigs).map_err(|e| Error::file_io(&path, e))?;

    log::info!("Wrote {} records to \"{}\"", contigs.len(), path.display());
    Ok(path)
}

pub fn to_fasta_string(contigs: &Contigs) -> String {
    let mut res = String::new();
    for contig in contigs.iter() {
        res.push_str(&contig.dump());
        res.push('\n');
    }
    res
}
