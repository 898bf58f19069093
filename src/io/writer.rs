/*! Article writer.

Articles are either written as a single JSON list (the default), or as JSON lines.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::error::Error;
use crate::pipeline::types::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON array holding every article.
    #[default]
    Json,
    /// One article per line.
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::JsonLines),
            other => Err(Error::Custom(format!(
                "unknown output format {} (expected json or jsonl)",
                other
            ))),
        }
    }
}

pub struct ArticleWriter {
    dst: PathBuf,
    format: OutputFormat,
}

impl ArticleWriter {
    pub fn new(dst: &Path, format: OutputFormat) -> Self {
        Self {
            dst: dst.to_path_buf(),
            format,
        }
    }

    /// Write articles to destination, creating parent folders if needed.
    /// Destination is truncated.
    pub fn write(&self, articles: &[Article]) -> Result<(), Error> {
        if let Some(parent) = self.dst.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("saving {} articles to {:?}", articles.len(), self.dst);
        let mut out = BufWriter::new(File::create(&self.dst)?);
        match self.format {
            OutputFormat::Json => serde_json::to_writer(&mut out, articles)?,
            OutputFormat::JsonLines => {
                for article in articles {
                    serde_json::to_writer(&mut out, article)?;
                    out.write_all(b"\n")?;
                }
            }
        }
        out.flush()?;
        info!("saving done");

        Ok(())
    }
}
