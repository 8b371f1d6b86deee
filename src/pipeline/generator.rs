//! The external generator seam.
//!
//! The crate never talks to a model itself.  Hosts implement
//! [`ContentGenerator`] (whole response) or [`StreamingGenerator`]
//! (chunked response, wrapped with [`Buffered`]).

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::stream::{buffer_stream, GenerationChunk};
use crate::prompt::PromptConfig;

/// A text generator returning the complete response.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &PromptConfig) -> anyhow::Result<String>;
}

/// A text generator returning a chunk stream.
#[async_trait]
pub trait StreamingGenerator: Send + Sync {
    async fn stream(
        &self,
        prompt: &PromptConfig,
    ) -> anyhow::Result<BoxStream<'static, GenerationChunk>>;
}

/// Adapts a [`StreamingGenerator`] into a [`ContentGenerator`] by
/// buffering the stream before returning.
pub struct Buffered<G>(pub G);

#[async_trait]
impl<G: StreamingGenerator> ContentGenerator for Buffered<G> {
    async fn generate(&self, prompt: &PromptConfig) -> anyhow::Result<String> {
        let stream = self.0.stream(prompt).await?;
        Ok(buffer_stream(stream).await?)
    }
}

// ============================================================================
// Tests
// ============================================================================
