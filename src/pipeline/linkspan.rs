//! Link span extraction pipeline
//!
//! Wikipedia dump fragments (as produced by WikiExtractor in JSON mode, with links kept)
//! are turned into a list of articles, each article holding its paragraphs as plain text,
//! along with the targets and anchor texts of the links they contained.
//!
//! # Processing
//! 1. Dump fragments are discovered two levels below the source folder, and processed in order.
//! 1. Each record is split into paragraphs (newline-separated).
//! 1. Each paragraph is cleaned from its markup, and its link targets and anchors are extracted.
//! 1. Empty paragraphs are dropped, then articles without any paragraph left.
//! 1. The resulting list is written at once.
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::io::{dump_files, ArticleWriter, DumpReader, OutputFormat};
use crate::markup;
use crate::pipeline::types::{Article, DumpRecord, Paragraph};
use crate::pipeline::Pipeline;

pub struct LinkSpan {
    src: PathBuf,
    dst: PathBuf,
    format: OutputFormat,
    decode: bool,
    keep_empty: bool,
}

impl LinkSpan {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            format: OutputFormat::default(),
            decode: true,
            keep_empty: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Keep link targets percent-encoded if `decode` is false.
    pub fn with_decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Keep empty paragraphs (and articles).
    pub fn with_keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    /// Process a single record.
    ///
    /// Returns [None] if the article has no paragraph left.
    /// Misaligned paragraphs are logged and skipped.
    pub fn process_record(&self, record: &DumpRecord) -> Option<Article> {
        let paragraphs: Vec<Paragraph> = markup::split_paragraphs(&record.text)
            .enumerate()
            .filter_map(|(idx, raw)| match Paragraph::parse(raw, self.decode) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("article {}, paragraph {}: {}", record.id, idx, e);
                    None
                }
            })
            .filter(|p| self.keep_empty || !p.is_empty())
            .collect();

        let article = Article::new(record.id.clone(), record.revid.clone(), paragraphs);
        if !self.keep_empty && article.is_empty() {
            debug!("article {} has no paragraph kept", record.id);
            return None;
        }

        Some(article)
    }

    /// Process a dump fragment.
    ///
    /// Malformed records are logged and skipped; failing to open the file is an error.
    pub fn process_file(&self, path: &Path) -> Result<Vec<Article>, Error> {
        let reader = DumpReader::from_path(path)?;
        let articles = reader
            .enumerate()
            .filter_map(|(idx, record)| match record {
                Ok(r) => Some(r),
                Err(e) => {
                    error!("{:?}, record {}: {}", path, idx, e);
                    None
                }
            })
            .filter_map(|record| self.process_record(&record))
            .collect();

        Ok(articles)
    }

    /// Process every dump fragment without writing anything.
    pub fn collect(&self) -> Result<Vec<Article>, Error> {
        let files = dump_files(&self.src)?;
        if files.is_empty() {
            warn!("no dump fragment found in {:?}", self.src);
        }

        let nb_files = files.len();
        let mut output = Vec::new();
        for (idx, file) in files.iter().enumerate() {
            info!("loading {}/{}: {:?}", idx + 1, nb_files, file);
            let mut articles = self.process_file(file)?;
            debug!("{:?}: {} articles kept", file, articles.len());
            output.append(&mut articles);
        }

        info!("{} articles from {} files", output.len(), nb_files);
        Ok(output)
    }
}

impl Pipeline<Vec<Article>> for LinkSpan {
    fn run(&self) -> Result<Vec<Article>, Error> {
        let articles = self.collect()?;
        ArticleWriter::new(&self.dst, self.format).write(&articles)?;
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    fn record(id: &str, text: &str) -> DumpRecord {
        DumpRecord {
            id: id.to_string(),
            revid: "42".to_string(),
            url: None,
            title: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_paragraphs_dropped() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new());
        let r = record("1", "Title\n\n&lt;a href=\"B\"&gt;b&lt;/a&gt; text\n");
        let a = ls.process_record(&r).unwrap();
        assert_eq!(a.cur_id(), "1");
        assert_eq!(a.revid(), "42");
        assert_eq!(a.paragraphs().len(), 2);
        assert_eq!(a.paragraphs()[1].text(), "b text");
    }

    #[test]
    fn keep_empty() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new()).with_keep_empty(true);
        let a = ls.process_record(&record("1", "a\n\nb")).unwrap();
        assert_eq!(a.paragraphs().len(), 3);
        assert!(ls.process_record(&record("2", "")).is_some());
    }

    #[test]
    fn empty_article_dropped() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new());
        assert!(ls.process_record(&record("1", "\n  \n&lt;br&gt;")).is_none());
    }

    #[test]
    fn misaligned_paragraph_skipped() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new());
        let a = ls
            .process_record(&record("1", "ok\n&lt;a href=\"X\"&gt;never closed"))
            .unwrap();
        assert_eq!(a.paragraphs().len(), 1);
        assert_eq!(a.paragraphs()[0].text(), "ok");
    }

    #[test]
    fn raw_links() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new()).with_decode(false);
        let a = ls
            .process_record(&record("1", "<a href=\"A%20B\">ab</a>"))
            .unwrap();
        assert_eq!(a.paragraphs()[0].links(), ["A%20B"]);
    }

    #[test]
    fn process_file_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki_00");
        let mut f = File::create(&path).unwrap();
        writeln!(f, r#"{{"id": "1", "revid": "2", "text": "one"}}"#).unwrap();
        writeln!(f, "garbage").unwrap();
        writeln!(f, r#"{{"id": "3", "revid": "4", "text": ""}}"#).unwrap();
        writeln!(f, r#"{{"id": "5", "revid": "6", "text": "five"}}"#).unwrap();

        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new());
        let articles = ls.process_file(&path).unwrap();
        let ids: Vec<&str> = articles.iter().map(Article::cur_id).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn missing_file() {
        let ls = LinkSpan::new(PathBuf::new(), PathBuf::new());
        assert!(ls.process_file(Path::new("does/not/exist")).is_err());
    }
}
