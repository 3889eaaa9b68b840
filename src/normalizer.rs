pub mod preset;

use crate::{offsets::OffsetText, pipeline::Pipeline, stage::Stage};
use std::{borrow::Cow, fmt, sync::Arc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("stage `{stage}` cannot track character offsets")]
    NotCharMappable { stage: &'static str },
}

/// An ordered set of [`Stage`]s applied to every string.
///
/// Cheap to share: `Send + Sync`, and normalizing never mutates it.
pub struct Normalizer {
    pipeline: Pipeline,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Run every stage over `text`. Borrows when nothing changes.
    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.pipeline.process(text.into())
    }

    /// Normalize character by character, remembering which original
    /// character produced each output character.
    ///
    /// Fails when a stage has no per-character form (e.g. `NFKC`).
    pub fn normalize_with_offsets(&self, text: &str) -> Result<OffsetText, NormalizeError> {
        if let Some(stage) = self.pipeline.first_unmappable() {
            return Err(NormalizeError::NotCharMappable { stage });
        }
        Ok(self.offsets_unchecked(text))
    }

    /// `true` when [`Normalizer::normalize_with_offsets`] can succeed.
    pub fn tracks_offsets(&self) -> bool {
        self.pipeline.first_unmappable().is_none()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names().collect()
    }

    /// Callers must have checked [`Normalizer::tracks_offsets`].
    pub(crate) fn offsets_unchecked(&self, text: &str) -> OffsetText {
        OffsetText::build(text, &self.pipeline.char_mappers())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        preset::search()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[derive(Default)]
pub struct NormalizerBuilder {
    stages: Vec<Arc<dyn Stage>>,
}

impl NormalizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Normalizer {
        let pipeline = Pipeline::new(self.stages);
        debug!(
            stages = ?pipeline.stage_names().collect::<Vec<_>>(),
            tracks_offsets = pipeline.first_unmappable().is_none(),
            "normalizer built"
        );
        Normalizer { pipeline }
    }
}
