//! Prints the title, a text preview, the most frequent tokens and the tags
//! of one article.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tagwiki::{LexiconLoader, Options, Tagger};

#[derive(Debug, Parser)]
#[command(version, about = "Extract keyword tags from an encyclopedia article")]
struct Args {
    /// Article identifier, e.g. "Ranomafana_National_Park"
    article: String,

    /// Number of tags to print
    #[arg(short = 'n', long, default_value_t = 10)]
    tags: usize,

    /// Number of frequent tokens to print
    #[arg(short, long, default_value_t = 5)]
    tokens: usize,

    /// Number of preview characters to print (0 disables the preview)
    #[arg(short, long, default_value_t = 2000)]
    preview: usize,

    /// Base address the article identifier is appended to
    #[arg(long, default_value = tagwiki::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// JSON lexicon model for the annotator
    #[arg(long)]
    model: Option<PathBuf>,
}

fn run(args: Args) -> tagwiki::Result<()> {
    tagwiki::stopwords::init();

    let options = Options {
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout),
        preview_len: args.preview,
        token_count: args.tokens,
        tag_count: args.tags,
        ..Options::default()
    };
    let loader = LexiconLoader {
        model_path: args.model,
    };
    let tagger = Tagger::builder(&args.article)
        .options(options)
        .annotator_loader(loader)
        .build()?;

    println!("{}", tagger.title());
    println!();
    if args.preview > 0 {
        tagger.write_preview(io::stdout().lock(), args.preview)?;
        println!();
    }
    for freq in tagger.most_frequent_tokens_default()? {
        println!("{:<20} {:<6} {}", freq.token, freq.pos, freq.count);
    }
    println!();
    println!("{}", tagger.tags_default()?.join(", "));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("tagwiki: {err}");
            ExitCode::FAILURE
        }
    }
}
