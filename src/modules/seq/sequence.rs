//! Core sequence type
//!
//! A sequence is an opaque run of bytes with optional FASTA metadata. The
//! alignment kernel compares symbols by byte equality only; any case
//! normalisation happens at the I/O boundary before a sequence reaches it.

use std::fmt;

/// A biological sequence with optional identifier and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
    id: Option<String>,
    description: Option<String>,
}

impl Sequence {
    /// Create a new sequence from raw bytes
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            id: None,
            description: None,
        }
    }

    /// Set the sequence identifier
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the sequence description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Get the sequence length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sequence as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the sequence as a string
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.data).to_string()
    }

    /// Get the identifier (if any)
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the description (if any)
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Uppercase the sequence in place (ASCII only)
    pub fn make_ascii_uppercase(&mut self) {
        self.data.make_ascii_uppercase();
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, ">{}", id)?;
            if let Some(desc) = &self.description {
                write!(f, " {}", desc)?;
            }
            writeln!(f)?;
        }
        // 60 characters per line, FASTA style
        for chunk in self.data.chunks(60) {
            writeln!(f, "{}", String::from_utf8_lossy(chunk))?;
        }
        Ok(())
    }
}
