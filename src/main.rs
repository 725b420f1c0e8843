//! Sentiment Analysis Tool binary entrypoint.
//! One-shot analysis, interactive mode, JSON output, or the HTTP API.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use text_sentiment_analyzer::{
    api::{self, AppState},
    bootstrap,
    engine::Method,
    history::History,
    interactive::Session,
    report::{render_report, AnalysisDocument},
    telemetry::{init_tracing, DEFAULT_LOG_FILTER},
};

const EXAMPLES: &str = "Examples:
  text-sentiment-analyzer \"I love this product!\"
  text-sentiment-analyzer --method vader \"This is terrible\"
  text-sentiment-analyzer --interactive
  text-sentiment-analyzer --json \"Some text here\"
  text-sentiment-analyzer --serve --bind 0.0.0.0:8080";

/// Sentiment Analysis Tool - analyze text sentiment using VADER and TextBlob-style scoring
#[derive(Parser)]
#[command(name = "text-sentiment-analyzer", version, after_help = EXAMPLES)]
struct Cli {
    /// Text to analyze (if not provided, runs in interactive mode)
    text: Option<String>,

    /// Analysis method: vader, textblob or both (default from config: both)
    #[arg(long, value_parser = parse_method)]
    method: Option<Method>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Output file for results (works with --json)
    #[arg(short, long, requires = "json")]
    output: Option<PathBuf>,

    /// Serve the HTTP API instead of analyzing once
    #[arg(long, conflicts_with_all = ["text", "interactive", "json"])]
    serve: bool,

    /// Listen address for --serve (default from config: 127.0.0.1:8080)
    #[arg(long, requires = "serve")]
    bind: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_method(s: &str) -> Result<Method, text_sentiment_analyzer::AnalyzeError> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "text_sentiment_analyzer=debug,info",
        _ => "debug",
    };
    init_tracing(filter);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (cfg, analyzer) = bootstrap()?;
    let method = cli.method.unwrap_or(cfg.default_method);

    if cli.serve {
        let bind = cli.bind.clone().unwrap_or_else(|| cfg.bind.clone());
        let state = AppState::new(analyzer, &cfg)?;
        let rt = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
        return rt.block_on(api::serve(state, &bind));
    }

    let text = match cli.text {
        Some(t) if !cli.interactive => t,
        _ => {
            let history = History::with_capacity(cfg.history_cap);
            let session = Session {
                analyzer: &analyzer,
                history: &history,
                method,
                export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            };
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            return session.run(stdin.lock(), &mut stdout);
        }
    };

    let result = analyzer.analyze_with(&text, method);
    let now = Local::now();

    if cli.json {
        let doc = AnalysisDocument::new(text, method, result, now);
        match cli.output {
            Some(path) => {
                doc.write_to(&path)?;
                println!("Results saved to {}", path.display());
            }
            None => println!("{}", doc.to_json_pretty()?),
        }
    } else {
        let mut stdout = io::stdout();
        write!(stdout, "{}", render_report(&text, &result, now))?;
    }
    Ok(())
}
