use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::store::NoteStore;

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
///
/// Requests are handled one at a time, so the note store needs no locking.
pub struct McpServer {
    config: ServerConfig,
    store: NoteStore,
    initialized: bool,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_samples {
            NoteStore::with_samples()
        } else {
            NoteStore::new()
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: ServerConfig, store: NoteStore) -> Self {
        Self {
            config,
            store,
            initialized: false,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        tracing::info!("MCP Notes Server running on stdio");
        self.serve(stdin, stdout).await
    }

    /// Serve requests from `reader` until EOF, writing responses to `writer`.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let limit = self.config.max_message_bytes;
        let mut raw = Vec::new();

        loop {
            raw.clear();
            // Buffer at most one byte past the limit; the rest of an oversized line is skipped.
            let n = (&mut reader)
                .take((limit as u64).saturating_add(1))
                .read_until(b'\n', &mut raw)
                .await?;
            if n == 0 {
                break;
            }

            if n > limit {
                if raw.last() != Some(&b'\n') {
                    discard_line(&mut reader).await?;
                }
                tracing::warn!("Message too large (limit {limit} bytes)");
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                ).await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    ).await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!("Parse error: {e}");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    ).await?;
                    continue;
                }
            };

            // Validate jsonrpc version
            if req.jsonrpc != "2.0" {
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                ).await?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.is_notification() {
                    continue;
                }
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                ).await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &mut self.store) {
                write_response(&mut writer, &resp).await?;
            }

            if req.method == "initialize" && !self.initialized {
                tracing::info!("session initialized");
                self.initialized = true;
            }
        }

        Ok(())
    }
}

/// Consume input up to and including the next newline (or EOF).
async fn discard_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|b| *b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
