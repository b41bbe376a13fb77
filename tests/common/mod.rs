#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use icebreaker::ai::{CompletionService, MessagesRequest, MessagesResponse};
use icebreaker::core::models::{OutgoingMessage, PostReceipt};
use icebreaker::errors::IcebreakerError;
use icebreaker::slack::MessagingService;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

/// Completion service double that replays a canned reply and records requests.
pub struct StubCompletion {
    reply: Result<MessagesResponse, String>,
    requests: Mutex<Vec<MessagesRequest>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(MessagesResponse::from_text(text)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<MessagesRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, IcebreakerError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(IcebreakerError::Generation)
    }
}

/// Messaging service double that records posts and either accepts or rejects them.
pub struct StubMessaging {
    rejection: Option<String>,
    posted: Mutex<Vec<OutgoingMessage>>,
}

impl StubMessaging {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            posted: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(code: &str) -> Self {
        Self {
            rejection: Some(code.to_string()),
            posted: Mutex::new(Vec::new()),
        }
    }

    pub fn posted(&self) -> Vec<OutgoingMessage> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingService for StubMessaging {
    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostReceipt, IcebreakerError> {
        self.posted.lock().unwrap().push(message.clone());
        match &self.rejection {
            Some(code) => Err(IcebreakerError::Delivery(code.clone())),
            None => Ok(PostReceipt {
                channel: message.channel.clone(),
                ts: "1700000000.000100".to_string(),
            }),
        }
    }
}

/// In-memory log sink for asserting on formatted tracing output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Installs a subscriber writing into this buffer for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Serves exactly one HTTP response and hands back the raw request it received.
pub async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
