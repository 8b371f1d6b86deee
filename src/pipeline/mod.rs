//! Generation workflow: the only async part of the crate.
//!
//! Everything up to the prompt is pure.  The [`governor::Governor`] drives
//! the external [`generator::ContentGenerator`], buffers its output, and
//! retries with corrective context until the copy validates or the attempt
//! budget runs out.

pub mod generator;
pub mod governor;
pub mod stream;

pub use generator::{Buffered, ContentGenerator, StreamingGenerator};
pub use governor::{
    effective_personality, AttemptRecord, GenerationOutcome, GenerationPlan, GenerationRequest,
    Governor,
};
pub use stream::{buffer_stream, ChunkAccumulator, GenerationChunk};
