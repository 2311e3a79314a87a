//! FASTA format I/O
//!
//! This module reads FASTA files for the alignment executables. Alignment
//! inputs are pairs: a file must contain exactly two records, and for the
//! fit mode with jumps enabled the second record's description line carries
//! a `|`-delimited list of junction positions.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::engines::align::scoring::JunctionSet;
use crate::modules::seq::sequence::Sequence;

/// Error type for FASTA operations
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid FASTA input: {0}")]
    InvalidInput(String),

    #[error("junction list error: {0}")]
    InvalidJunctions(String),
}

/// A FASTA record
#[derive(Debug, Clone)]
pub struct FastaRecord {
    /// Sequence identifier
    pub id: String,
    /// Optional sequence description
    pub description: Option<String>,
    /// The sequence
    pub sequence: Sequence,
}

/// Read all records from a FASTA file
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, FastaError> {
    let file = File::open(path.as_ref())?;
    let records = parse_records(BufReader::new(file))?;
    log::info!(
        "read {} FASTA records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Read all records from FASTA-formatted text
pub fn read_fasta_string(content: &str) -> Result<Vec<FastaRecord>, FastaError> {
    parse_records(content.as_bytes())
}

/// Read an alignment input pair. The file must hold exactly two records;
/// both sequences are uppercased before they reach the byte-equality
/// kernel.
pub fn read_pair<P: AsRef<Path>>(path: P) -> Result<(Sequence, Sequence), FastaError> {
    let records = read_fasta(path)?;
    pair_from_records(records)
}

/// Extract the junction set of a fit-with-jumps input from the second
/// sequence's description line.
pub fn junctions_from_description(seq: &Sequence) -> Result<JunctionSet, FastaError> {
    let desc = seq.description().ok_or_else(|| {
        FastaError::InvalidJunctions(
            "the second sequence carries no junction list in its description".to_string(),
        )
    })?;
    desc.parse().map_err(|err| {
        FastaError::InvalidJunctions(format!("cannot parse junction list '{}': {}", desc, err))
    })
}

fn pair_from_records(records: Vec<FastaRecord>) -> Result<(Sequence, Sequence), FastaError> {
    if records.len() != 2 {
        return Err(FastaError::InvalidInput(format!(
            "expected exactly two sequences, found {}",
            records.len()
        )));
    }
    let mut iter = records.into_iter();
    match (iter.next(), iter.next()) {
        (Some(first), Some(second)) => {
            let mut first = first.sequence;
            let mut second = second.sequence;
            first.make_ascii_uppercase();
            second.make_ascii_uppercase();
            Ok((first, second))
        }
        _ => Err(FastaError::InvalidInput(
            "expected exactly two sequences".to_string(),
        )),
    }
}

fn parse_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current_id = String::new();
    let mut current_desc: Option<String> = None;
    let mut current_seq: Vec<u8> = Vec::new();

    let mut flush = |id: &str, desc: &Option<String>, seq: &mut Vec<u8>| {
        if !id.is_empty() && !seq.is_empty() {
            let mut sequence = Sequence::new(seq).with_id(id);
            if let Some(desc) = desc {
                sequence = sequence.with_description(desc);
            }
            records.push(FastaRecord {
                id: id.to_string(),
                description: desc.clone(),
                sequence,
            });
            seq.clear();
        }
    };

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            flush(&current_id, &current_desc, &mut current_seq);
            let mut parts = header.splitn(2, ' ');
            current_id = parts.next().unwrap_or("").to_string();
            current_desc = parts.next().map(|s| s.to_string());
        } else {
            current_seq.extend_from_slice(line.as_bytes());
        }
    }
    flush(&current_id, &current_desc, &mut current_seq);

    Ok(records)
}
