use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use textgauge_core::{
    FetchConfig, Lexicon, LexiconPaths, MetricsEngine, Pipeline, PipelineConfig, TextGaugeError,
    extract_article_from_html, fetch_file, fetch_stdin, fetch_url, is_remote, metrics_to_json, metrics_to_text,
    read_sources, write_report,
};
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

use echo::{
    format_size, print_banner, print_batch_summary, print_detail, print_step, print_success, print_timing,
    print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for single-article metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Score web articles with readability and sentiment metrics
#[derive(Parser, Debug)]
#[command(name = "textgauge")]
#[command(author = "Textgauge Contributors")]
#[command(version)]
#[command(about = "Readability and sentiment metrics for web articles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every article in the input table and write the metrics report
    Run(RunArgs),

    /// Compute metrics for one plain text file
    Analyze(AnalyzeArgs),

    /// Print the article text extracted from a page
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
struct LexiconArgs {
    /// Directory of stop word lists
    #[arg(long, default_value = "StopWords", value_name = "DIR")]
    stop_words: PathBuf,

    /// Positive word list
    #[arg(long, default_value = "MasterDictionary/positive-words.txt", value_name = "FILE")]
    positive: PathBuf,

    /// Negative word list
    #[arg(long, default_value = "MasterDictionary/negative-words.txt", value_name = "FILE")]
    negative: PathBuf,
}

impl LexiconArgs {
    fn load(&self) -> anyhow::Result<Lexicon> {
        let paths = LexiconPaths {
            stop_words_dir: self.stop_words.clone(),
            positive_words: self.positive.clone(),
            negative_words: self.negative.clone(),
        };
        Lexicon::load(&paths).context("Failed to load lexicon")
    }
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,
}

impl FetchArgs {
    fn config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Spreadsheet (.xlsx) or CSV table with URL_ID and URL columns
    #[arg(short, long, default_value = "Input.xlsx", value_name = "FILE")]
    input: PathBuf,

    /// Report file
    #[arg(short, long, default_value = "Output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Directory for extracted article text
    #[arg(long, default_value = "articles", value_name = "DIR")]
    articles_dir: PathBuf,

    /// Do not save extracted article text
    #[arg(long)]
    no_articles: bool,

    #[command(flatten)]
    fetch: FetchArgs,

    #[command(flatten)]
    lexicon: LexiconArgs,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Plain text file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    #[command(flatten)]
    lexicon: LexiconArgs,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    fetch: FetchArgs,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        print_banner();
    }

    match cli.command {
        Command::Run(args) => run(args, cli.verbose).await,
        Command::Analyze(args) => analyze(args, cli.verbose),
        Command::Extract(args) => extract(args, cli.verbose).await,
    }
}

async fn run(args: RunArgs, verbose: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    if verbose {
        print_step(1, 4, "Loading lexicon");
    }
    let lexicon = args.lexicon.load()?;
    if verbose {
        print_detail("Stop words", lexicon.stop_word_count());
        print_detail("Positive", lexicon.positive_count());
        print_detail("Negative", lexicon.negative_count());
    }

    if verbose {
        print_step(2, 4, &format!("Reading {}", args.input.display().bright_white()));
    }
    let sources =
        read_sources(&args.input).with_context(|| format!("Failed to read input: {}", args.input.display()))?;
    if verbose {
        print_detail("Articles", sources.len());
    }

    if verbose {
        print_step(3, 4, "Fetching and scoring articles");
    }
    let config = PipelineConfig::builder()
        .fetch(args.fetch.config())
        .articles_dir(args.articles_dir)
        .save_articles(!args.no_articles)
        .build();
    let pipeline = Pipeline::new(MetricsEngine::new(lexicon), config);
    let outcome = pipeline.run(&sources).await;

    if verbose {
        print_step(4, 4, "Writing report");
    }
    write_report(&args.output, &outcome.rows)
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    if verbose {
        print_batch_summary(&outcome);
        print_timing("Total", started.elapsed());
    } else if !outcome.skipped.is_empty() {
        print_warning(&format!("{} of {} articles skipped", outcome.skipped.len(), sources.len()));
    }

    print_success(&format!(
        "{} rows written to {}",
        outcome.rows.len(),
        args.output.display().bright_white()
    ));

    Ok(())
}

fn analyze(args: AnalyzeArgs, verbose: bool) -> anyhow::Result<()> {
    let lexicon = args.lexicon.load()?;

    let text = if args.input == "-" {
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if verbose {
        print_detail("Size", format_size(text.len()));
    }

    if text.trim().is_empty() {
        return Err(TextGaugeError::NoContent).context("Nothing to analyze");
    }

    let metrics = MetricsEngine::new(lexicon).compute(&text);

    if verbose {
        print_detail("Sentences", metrics.sentence_count);
    }

    let output = match args.format {
        OutputFormat::Text => metrics_to_text(&metrics),
        OutputFormat::Json => metrics_to_json(&metrics, true).context("Failed to serialize metrics")? + "\n",
    };
    print!("{}", output);

    Ok(())
}

async fn extract(args: ExtractArgs, verbose: bool) -> anyhow::Result<()> {
    let html = if args.input == "-" {
        fetch_stdin().context("Failed to read from stdin")?
    } else if is_remote(&args.input) {
        if Url::parse(&args.input).is_err() {
            bail!("Invalid URL: {}", args.input);
        }
        if verbose {
            print_step(1, 2, &format!("Fetching from {}", args.input.bright_white().underline()));
        }
        fetch_url(&args.input, &args.fetch.config()).await.context("Failed to fetch URL")?
    } else {
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if verbose {
        print_detail("Size", format_size(html.len()));
        print_step(2, 2, "Extracting article text");
    }

    let article = extract_article_from_html(&html).context("Failed to extract article")?;
    if article.is_empty() {
        return Err(TextGaugeError::NoContent).context("Failed to extract article");
    }

    let text = article.text();
    match args.output {
        Some(path) => {
            fs::write(&path, &text).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", text);
        }
    }

    Ok(())
}
