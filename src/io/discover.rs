//! Dump fragment discovery.
//!
//! WikiExtractor writes its output as `<dst>/AA/wiki_00`, `<dst>/AA/wiki_01`, …, `<dst>/AB/wiki_00`.
//! We take every file two levels below the source folder.
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;

/// List dump fragments under `src`, sorted.
pub fn dump_files(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = src.join("*").join("*");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non UTF-8 source path: {:?}", src)))?;
    debug!("looking for dump fragments matching {}", pattern);

    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        } else {
            warn!("skipping {:?}: not a file", path);
        }
    }

    files.sort();
    Ok(files)
}
