/*! JSON-lines dump fragment reader.
 * !*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::error::Error;
use crate::pipeline::types::DumpRecord;

/// Iterates over the records of a dump fragment, one JSON object per line.
///
/// Blank lines are skipped. Malformed lines yield an error but do not stop iteration.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type DumpReader = Reader<File>;

impl DumpReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(handle))
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<DumpRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str::<DumpRecord>(&line).map_err(Error::Serde));
        }
    }
}
