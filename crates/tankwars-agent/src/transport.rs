//! Line-based request/response transport to the game server.
//!
//! One request line out, one response line back. The connection sits behind
//! a single mutex so concurrent callers never interleave their exchanges.

use async_trait::async_trait;
use tankwars_protocol::sanitize_line;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{debug, info, trace};

/// A strictly sequential request/response channel.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn exchange(&self, request: &str) -> Result<String, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to connect to {0}: {1}")]
    Connect(String, std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed by server")]
    Closed,
}

struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

pub struct TcpTransport {
    conn: Mutex<Connection>,
    peer: String,
}

impl TcpTransport {
    pub async fn connect(address: &str) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(|e| TransportError::Connect(address.to_string(), e))?;
        stream.set_nodelay(true)?;
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| address.to_string());
        let (read, write) = stream.into_split();

        info!(%peer, "Connected to game server");
        Ok(Self {
            conn: Mutex::new(Connection {
                reader: BufReader::new(read),
                writer: write,
            }),
            peer,
        })
    }
}

#[async_trait]
impl Exchange for TcpTransport {
    async fn exchange(&self, request: &str) -> Result<String, TransportError> {
        let line = sanitize_line(request);
        let mut conn = self.conn.lock().await;

        conn.writer.write_all(format!("{line}\r\n").as_bytes()).await?;
        conn.writer.flush().await?;
        trace!(request = %line, "sent");

        let mut response = String::new();
        let read = conn.reader.read_line(&mut response).await?;
        if read == 0 {
            debug!(peer = %self.peer, "server closed the connection");
            return Err(TransportError::Closed);
        }

        let response = response.trim_end_matches(['\r', '\n']).to_string();
        trace!(bytes = response.len(), "received");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn exchange_round_trips_one_line() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read, mut write) = stream.into_split();
            let mut lines = BufReader::new(read).lines();
            let line = lines.next_line().await.unwrap().unwrap();
            write.write_all(format!("echo {line}\r\n").as_bytes()).await.unwrap();
            line
        });

        let transport = TcpTransport::connect(&addr).await.unwrap();
        let response = transport.exchange("MOVE  1 2\n 3 4").await.unwrap();
        assert_eq!(response, "echo MOVE 1 2 3 4");
        assert_eq!(server.await.unwrap(), "MOVE 1 2 3 4");
    }

    #[tokio::test]
    async fn closed_connection_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            drop(stream);
        });

        let transport = TcpTransport::connect(&addr).await.unwrap();
        let err = transport.exchange("STATUS").await.unwrap_err();
        assert!(matches!(err, TransportError::Closed | TransportError::Io(_)));
    }

    #[tokio::test]
    async fn connect_failure_names_the_address() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        match TcpTransport::connect(&addr).await {
            Err(TransportError::Connect(a, _)) => assert_eq!(a, addr),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => {}
        }
    }
}
