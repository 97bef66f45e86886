// WebSocket client utilities for testing

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// WebSocket test client
pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect to a WebSocket endpoint, retrying until success or timeout.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Connect and consume the `init` greeting, returning it.
    pub async fn connect_and_init(url: &str) -> Result<(Self, Value), Box<dyn std::error::Error>> {
        let mut client = Self::connect_retry(url, Duration::from_secs(1)).await?;
        let init = client.recv_json().await?;
        Ok((client, init))
    }

    /// Receive the next frame with a timeout. `Ok(None)` means the stream ended.
    pub async fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Message>, Box<dyn std::error::Error>> {
        tokio::time::timeout(timeout, self.stream.next())
            .await
            .map_err(|_| "Timeout waiting for message")?
            .transpose()
            .map_err(|e| e.into())
    }

    /// Next text frame as JSON, skipping control frames.
    pub async fn recv_json(&mut self) -> Result<Value, Box<dyn std::error::Error>> {
        loop {
            match self.recv_timeout(RECV_TIMEOUT).await? {
                Some(Message::Text(text)) => return Ok(serde_json::from_str(text.as_str())?),
                Some(Message::Ping(_)) | Some(Message::Pong(_)) => continue,
                Some(other) => return Err(format!("expected text frame, got {other:?}").into()),
                None => return Err("connection closed".into()),
            }
        }
    }

    /// Asserts that no text frame arrives within `window`.
    pub async fn expect_silence(
        &mut self,
        window: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match tokio::time::timeout(window, self.stream.next()).await {
            Err(_) => Ok(()),
            Ok(Some(Ok(Message::Text(text)))) => {
                Err(format!("unexpected message: {}", text.as_str()).into())
            }
            Ok(_) => Ok(()),
        }
    }

    /// Send a text message
    pub async fn send(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::text(text.to_string())).await?;
        Ok(())
    }

    pub async fn send_binary(&mut self, bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::binary(bytes)).await?;
        Ok(())
    }

    pub async fn send_json(&mut self, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
        self.send(&value.to_string()).await
    }

    pub async fn setup(&mut self, names: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let positions: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
        self.send_json(&json!({
            "type": "setup",
            "data": { "setupPositions": positions }
        }))
        .await
    }

    pub async fn play(
        &mut self,
        character: &str,
        code: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.send_json(&json!({
            "type": "move",
            "data": { "character": character, "move": code }
        }))
        .await
    }

    pub async fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.send_json(&json!({ "type": "reset" })).await
    }

    /// Close the connection
    pub async fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }
}
