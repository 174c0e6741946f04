use std::process::ExitCode;

use anyhow::Context;
use skyview_core::{AppError, Config};
use skyview_ui::{render, RequestOrchestrator, WidgetState};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Type a city name and press Enter. /here uses the device location, /quit exits.";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Skyview failed: {:?}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    skyview_core::init()?;

    let (config, _warnings) = Config::load_validated()?;
    let widget =
        RequestOrchestrator::from_config(&config).context("Failed to build HTTP client")?;

    tracing::info!("Skyview started");
    println!("Skyview - {}", HELP);

    // Every transition is drawn, Loading included. Ends when the widget drops.
    let mut updates = widget.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            show(&state);
        }
    });

    widget.load_default(&config.default_city).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => println!("{}", HELP),
            "/here" => widget.request_device_location().await,
            _ => {
                widget.set_search_input(&line);
                widget.submit_search().await;
            }
        }
    }

    drop(widget);
    renderer.await.context("Render task failed")?;

    tracing::info!("Skyview shutting down");
    Ok(())
}

fn show(state: &WidgetState) {
    print!("\n{}", render(&state.view));
    if !state.search_input.is_empty() {
        println!("> {}", state.search_input);
    }
}
