//! Input and output records.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::markup;

/// One line of a dump fragment, as written by WikiExtractor in JSON mode.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DumpRecord {
    pub id: String,
    #[serde(default)]
    pub revid: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub text: String,
}

/// Cleaned paragraph along with its link targets and anchor spans.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    #[serde(rename = "cur_id_by_name")]
    links: Vec<String>,
    anchors: Vec<String>,
}

impl Paragraph {
    /// Build a paragraph from raw dump markup.
    ///
    /// Fails with [Error::MisalignedAnchors] when links are found but no anchor span is.
    /// Other count mismatches (an unclosed anchor among closed ones, say) are kept and logged.
    pub fn parse(raw: &str, decode: bool) -> Result<Self, Error> {
        let links = markup::extract_links(raw, decode);
        let anchors = markup::extract_anchors(raw);
        if !links.is_empty() && anchors.is_empty() {
            return Err(Error::MisalignedAnchors {
                links: links.len(),
                anchors: 0,
            });
        }
        if links.len() != anchors.len() {
            debug!(
                "{} link targets for {} anchor spans in {:?}",
                links.len(),
                anchors.len(),
                raw
            );
        }

        Ok(Self {
            text: markup::clean_markup(raw),
            links,
            anchors,
        })
    }

    /// true if there's no text left once trimmed.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Article {
    cur_id: String,
    revid: String,
    paragraphs: Vec<Paragraph>,
}

impl Article {
    pub fn new(cur_id: String, revid: String, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            cur_id,
            revid,
            paragraphs,
        }
    }

    pub fn cur_id(&self) -> &str {
        &self.cur_id
    }

    pub fn revid(&self) -> &str {
        &self.revid
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// true if the article has no paragraph with text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_empty)
    }
}
