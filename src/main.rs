mod chat;
mod common;
mod config;
mod network;
mod ui;

use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use network::ChatClient;
use tokio::sync::mpsc;
use ui::ChatApp;
use ui::state::AppState;

#[derive(Parser)]
#[command(name = "chatbox", version, about = "Desktop chatbot client")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the chat endpoint URL from the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(endpoint) = cli.endpoint {
        app_config.endpoint = endpoint;
    }

    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy Network Task (Chạy ngầm)
    let endpoint = app_config.endpoint.clone();
    let typing_delay = Duration::from_millis(app_config.typing_delay_ms);
    tokio::spawn(async move {
        let client = ChatClient::new(event_tx, cmd_rx, endpoint, typing_delay);
        if let Err(err) = client.run().await {
            log::error!("Chat client terminated: {err}");
        }
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Chatbox",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started, endpoint: {}", app_config.endpoint);

            let state = AppState::new(app_config.dark_mode, app_config.transfer_path.clone());
            Ok(Box::new(ChatApp::new(
                cc,
                state,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
