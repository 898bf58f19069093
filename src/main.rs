//! # wikispan
//!
//! Turns Wikipedia dump fragments (WikiExtractor JSON output, with links kept)
//! into a list of articles, each paragraph holding its plain text,
//! its link targets and the anchor text of each link.
//!
//! ## Getting started
//!
//! ```sh
//! wikispan 0.1.0
//! plain text and link spans from Wikipedia dumps.
//!
//! USAGE:
//!     wikispan <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Extract paragraphs, links and anchors from dump fragments
//!     help       Prints this message or the help of the given subcommand(s)
//!     lookup     Get the page id of a title through the MediaWiki API
//! ```
//!
//! Logging is controlled through `RUST_LOG` (`RUST_LOG=info wikispan extract ...`).
use structopt::StructOpt;

use wikispan::cli;
use wikispan::error::Error;
use wikispan::lookup::CurIdLookup;
use wikispan::pipeline::{LinkSpan, Pipeline};

#[macro_use]
extern crate log;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::WikiSpan::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::WikiSpan::Extract(e) => {
            let p = LinkSpan::new(e.src, e.dst)
                .with_format(e.format)
                .with_decode(!e.raw_links)
                .with_keep_empty(e.keep_empty);
            let articles = p.run()?;
            info!("extracted {} articles", articles.len());
        }
        cli::WikiSpan::Lookup(l) => {
            let lookup = CurIdLookup::new(&l.lang)?;
            let cur_id = lookup.cur_id(&l.title)?;
            println!("{}", cur_id);
        }
    };
    Ok(())
}
