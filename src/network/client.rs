use std::error::Error;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::common::{Message, NetworkCommand, NetworkEvent};

/// Response shape của chat endpoint: `{ "message": { "content": ... } }`.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Value,
}

pub struct ChatClient {
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    http: reqwest::Client,
    endpoint: String,
    /// Cosmetic pacing before the request fires; not a timeout.
    typing_delay: Duration,
}

impl ChatClient {
    pub fn new(
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        endpoint: String,
        typing_delay: Duration,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            http: reqwest::Client::new(),
            endpoint,
            typing_delay,
        }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn Error>> {
        log::info!("Chat client started, endpoint: {}", self.endpoint);

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                NetworkCommand::FetchReply(history) => {
                    self.handle_fetch_reply(history).await;
                }
            }
        }

        Ok(())
    }

    async fn handle_fetch_reply(&mut self, history: Vec<Message>) {
        // Giả lập "bot đang gõ" trước khi bắn request.
        tokio::time::sleep(self.typing_delay).await;

        let event = match self.fetch_reply(&history).await {
            Ok(content) => NetworkEvent::ReplyReceived(content),
            Err(err) => {
                log::warn!("Reply fetch failed: {err}");
                NetworkEvent::ReplyFailed
            }
        };

        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("Failed to notify UI about reply: {err}");
        }
    }

    /// POST toàn bộ mảng tin nhắn, trả về `message.content` thô.
    async fn fetch_reply(&self, history: &[Message]) -> Result<Value, Box<dyn Error>> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(history)
            .send()
            .await?
            .error_for_status()?;

        let reply: ChatReply = response.json().await?;
        Ok(reply.message.content)
    }
}
