use clap::Parser;
use seo_lens::{Analysis, render};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.serve {
        if let Err(e) = seo_lens::server::serve(&config).await {
            ::log::error!("Service stopped: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let Some(url) = args.url else {
        eprintln!("Error: a URL is required unless --serve is given");
        return ExitCode::FAILURE;
    };

    ::log::info!("Starting analysis for: {}", url);
    let start_time = std::time::Instant::now();

    let report = match Analysis::new(url).with_config(config).run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Analysis complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render::render_text(&report));
    }

    ExitCode::SUCCESS
}
