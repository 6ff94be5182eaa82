use clap::Parser;
use seo_lens::parsers::html;
use seo_lens::{analyze, render};
use std::error::Error;
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Score a saved HTML file without fetching it", long_about = None)]
struct Args {
    /// Path to the HTML file
    file: PathBuf,

    /// URL the page was saved from (used for canonical advice and favicon resolution)
    #[arg(short, long, default_value = "https://example.com/")]
    url: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let page_url = Url::parse(&args.url)?;
    let contents = std::fs::read_to_string(&args.file)?;

    let tags = html::parse(&contents, &page_url);
    println!("Extracted {} tag entries from {}", tags.len(), args.file.display());

    let report = analyze(&tags, page_url.as_str());
    print!("{}", render::render_text(&report));
    Ok(())
}
