//! Line-oriented corpus ingestion.
//!
//! A corpus is a UTF-8 text file, gzip-compressed when its name ends in
//! `.gz`. Concatenated gzip members are read as one stream. Each line is either a `category\ttitle\tbody` record or plain text.

use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Which tab-separated column holds the text of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyColumn {
    /// The last column.
    #[default]
    Last,
    /// A zero-based column index.
    Nth(usize),
}

/// Selects the text of a corpus line.
///
/// Records with at least three columns yield the chosen column; anything
/// else falls back to the whole line.
#[must_use]
pub fn body_text(line: &str, column: BodyColumn) -> &str {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 3 {
        return line;
    }
    match column {
        BodyColumn::Last => parts[parts.len() - 1],
        BodyColumn::Nth(i) => parts.get(i).copied().unwrap_or(line),
    }
}

/// Opens a corpus file, transparently decompressing `.gz`.
pub fn open_corpus(path: &Path) -> Result<Box<dyn BufRead>> {
    if !path.exists() {
        return Err(Error::CorpusNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    debug!("Opening corpus {} (gzip: {gzipped})", path.display());

    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Numbered lines of a corpus. Stops at the first read error.
pub struct CorpusLines<R> {
    lines: Lines<R>,
    index: usize,
    failed: bool,
}

impl<R: BufRead> CorpusLines<R> {
    pub const fn new(lines: Lines<R>) -> Self {
        Self {
            lines,
            index: 0,
            failed: false,
        }
    }

    pub fn from_reader(reader: R) -> Self {
        Self::new(reader.lines())
    }
}

impl<R: BufRead> Iterator for CorpusLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.lines.next()? {
            Ok(line) => {
                let index = self.index;
                self.index += 1;
                Some(Ok((index, line)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(Error::Io(e)))
            }
        }
    }
}
