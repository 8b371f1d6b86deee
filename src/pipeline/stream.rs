//! Stream buffering: chunked generator output → one complete text.
//!
//! Validation needs the whole text, so streamed output is always drained
//! into a [`ChunkAccumulator`] before anything checks it.

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, Result};

/// A single chunk from a streaming generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationChunk {
    /// Partial text.
    TextDelta { text: String },
    /// End of stream.  `content`, when present, replaces the accumulated text.
    Done {
        #[serde(default)]
        content: Option<String>,
    },
    /// The generator failed mid-stream.
    Error { message: String },
}

/// Accumulates chunks into the complete response.
#[derive(Debug, Default)]
pub struct ChunkAccumulator {
    text: String,
    done: bool,
    error: Option<String>,
}

impl ChunkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a chunk, returning `true` once the stream is finished.
    pub fn push(&mut self, chunk: GenerationChunk) -> bool {
        match chunk {
            GenerationChunk::TextDelta { text } => {
                self.text.push_str(&text);
                false
            }
            GenerationChunk::Done { content } => {
                if let Some(content) = content {
                    self.text = content;
                }
                self.done = true;
                true
            }
            GenerationChunk::Error { message } => {
                self.error = Some(message);
                true
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Final text, or an error if the stream failed or produced nothing.
    pub fn finish(self) -> Result<String> {
        if let Some(message) = self.error {
            return Err(GovernanceError::Stream { message });
        }
        if self.text.trim().is_empty() {
            return Err(GovernanceError::Stream {
                message: "stream ended without content".to_string(),
            });
        }
        if !self.done {
            log::debug!("Stream closed without a done marker; using buffered text");
        }
        Ok(self.text)
    }
}

/// Drain a chunk stream into the complete text.
pub async fn buffer_stream<S>(stream: S) -> Result<String>
where
    S: Stream<Item = GenerationChunk>,
{
    let mut acc = ChunkAccumulator::new();
    futures::pin_mut!(stream);
    while let Some(chunk) = stream.next().await {
        if acc.push(chunk) {
            break;
        }
    }
    acc.finish()
}

// ============================================================================
// Tests
// ============================================================================
