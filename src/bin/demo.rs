//! Demo that runs the canned texts through the engine and prints each report.
//!
//! `demo` runs the full tour, `demo --quick` only checks that the engine works.

use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use text_sentiment_analyzer::{
    bootstrap,
    engine::Method,
    report::render_report,
    samples::{DEMO_TEXTS, QUICK_CHECK_TEXT},
    telemetry::{init_tracing, DEFAULT_LOG_FILTER},
    Analyzer,
};

fn main() -> ExitCode {
    init_tracing(DEFAULT_LOG_FILTER);

    let analyzer = match bootstrap() {
        Ok((_, a)) => a,
        Err(e) => {
            eprintln!("✗ Error during startup: {e:#}");
            return ExitCode::from(1);
        }
    };

    if std::env::args().any(|a| a == "--quick") {
        quick_test(&analyzer);
        return ExitCode::SUCCESS;
    }

    let pause = std::env::var("DEMO_PAUSE_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis);
    run_demo(&analyzer, pause);
    ExitCode::SUCCESS
}

fn run_demo(analyzer: &Analyzer, pause: Option<Duration>) {
    let heavy = "=".repeat(70);
    println!("{heavy}");
    println!("SENTIMENT ANALYSIS TOOL - DEMO");
    println!("{heavy}");
    println!("This demo showcases the tool's capabilities with various text examples.\n");

    for (i, demo) in DEMO_TEXTS.iter().enumerate() {
        println!("\n{}. {}", i + 1, demo.category);
        println!("   Description: {}", demo.description);
        println!("{}", "-".repeat(50));

        let result = analyzer.analyze_with(demo.text, Method::Both);
        print!("{}", render_report(demo.text, &result, Local::now()));

        if i + 1 < DEMO_TEXTS.len() {
            println!("\n{heavy}");
            if let Some(p) = pause {
                std::thread::sleep(p);
            }
        }
    }

    println!("\n{heavy}");
    println!("DEMO SUMMARY");
    println!("{heavy}");
    println!("The demo showcased:");
    println!("✓ Two sentiment scoring methods (VADER and TextBlob-style)");
    println!("✓ Emotion detection");
    println!("✓ Text statistics");
    println!("✓ Different text types (reviews, social media, formal)");
    println!("✓ Mixed sentiment");
    println!();
    println!("Analyzed {} different text examples.", DEMO_TEXTS.len());
    println!();
    println!("To try the tool yourself:");
    println!("• Interactive: text-sentiment-analyzer --interactive");
    println!("• Single analysis: text-sentiment-analyzer \"Your text here\"");
    println!("• HTTP API: text-sentiment-analyzer --serve");
    println!("{heavy}");
}

fn quick_test(analyzer: &Analyzer) {
    println!("Running quick functionality test...");
    let result = analyzer.analyze_with(QUICK_CHECK_TEXT, Method::Both);
    if result.vader().is_some() && result.textblob().is_some() {
        println!("✓ Tool is working correctly!");
        println!("✓ All analysis methods functioning");
        println!("✓ Ready for use");
    } else {
        println!("✗ Missing scores in analysis result");
    }
}
