//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::io::OutputFormat;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wikispan",
    about = "plain text and link spans from Wikipedia dumps."
)]
/// Holds every command that is callable by the `wikispan` command.
pub enum WikiSpan {
    #[structopt(about = "Extract paragraphs, links and anchors from dump fragments")]
    Extract(Extract),
    #[structopt(about = "Get the page id of a title through the MediaWiki API")]
    Lookup(Lookup),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// wikispan-extract 0.1.0
/// Extract paragraphs, links and anchors from dump fragments
///
/// USAGE:
///     wikispan extract [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -e, --keep-empty    keep empty paragraphs and articles
///     -r, --raw-links     do not percent-decode link targets
///
/// OPTIONS:
///     -f, --format <format>    output format (json or jsonl) [default: json]
///
/// ARGS:
///     <src>    source (contains AA/wiki_00, ...)
///     <dst>    output file
/// ```
pub struct Extract {
    #[structopt(parse(from_os_str), help = "source (contains AA/wiki_00, ...)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output file")]
    pub dst: PathBuf,
    #[structopt(
        short = "f",
        long = "format",
        help = "output format (json or jsonl)",
        default_value = "json",
        possible_values = &["json", "jsonl"]
    )]
    pub format: OutputFormat,
    #[structopt(short = "r", long = "raw-links", help = "do not percent-decode link targets")]
    pub raw_links: bool,
    #[structopt(
        short = "e",
        long = "keep-empty",
        help = "keep empty paragraphs and articles"
    )]
    pub keep_empty: bool,
}

#[derive(Debug, StructOpt)]
/// Lookup command and parameters.
pub struct Lookup {
    #[structopt(help = "page title")]
    pub title: String,
    #[structopt(short = "l", long = "lang", help = "wikipedia language", default_value = "ko")]
    pub lang: String,
}
