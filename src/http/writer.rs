use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Anything that renders to a complete HTTP/1.1 message.
pub trait WireMessage {
    fn get_result(&self) -> Bytes;
}

/// Hands serialized bytes to a caller-owned transport.
///
/// The writer remembers how much has been accepted, so a call interrupted by
/// an error can be retried and resumes where it stopped.
pub struct MessageWriter {
    buffer: Bytes,
    written: usize,
}

impl MessageWriter {
    pub fn new(buffer: Bytes) -> Self {
        Self { buffer, written: 0 }
    }

    pub fn from_message(message: &impl WireMessage) -> Self {
        Self::new(message.get_result())
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.written
    }

    pub fn is_complete(&self) -> bool {
        self.written == self.buffer.len()
    }

    /// Writes the remaining bytes, then flushes the stream.
    ///
    /// A write that accepts zero bytes means the peer is gone and is
    /// reported as an error.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!(
                    "connection closed while writing ({} of {} bytes written)",
                    self.written,
                    self.buffer.len()
                ));
            }

            self.written += n;
        }

        stream.flush().await?;

        tracing::debug!(bytes = self.buffer.len(), "Message written");

        Ok(())
    }
}
