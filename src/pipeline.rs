// src/pipeline.rs
use crate::stage::{CharBuf, CharMapper, Stage};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

pub(crate) type Mappers<'p> = SmallVec<[&'p dyn CharMapper; 4]>;

pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                continue;
            }
            current = stage.apply(current);
        }

        current
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    /// Name of the first stage that has no char mapper, if any.
    pub fn first_unmappable(&self) -> Option<&'static str> {
        self.stages
            .iter()
            .find(|s| s.as_char_mapper().is_none())
            .map(|s| s.name())
    }

    /// Char mappers of every stage, in order. Stages without one are
    /// skipped; callers check [`Pipeline::first_unmappable`] beforehand.
    pub(crate) fn char_mappers(&self) -> Mappers<'_> {
        self.stages
            .iter()
            .filter_map(|s| s.as_char_mapper())
            .collect()
    }
}

/// Push the result of running `c` through every mapper onto `out`.
/// `scratch` is reused between calls to avoid reallocating.
pub(crate) fn map_through(
    mappers: &[&dyn CharMapper],
    c: char,
    out: &mut CharBuf,
    scratch: &mut CharBuf,
) {
    out.clear();
    out.push(c);
    for mapper in mappers {
        scratch.clear();
        for &x in out.iter() {
            mapper.map_into(x, scratch);
        }
        std::mem::swap(out, scratch);
    }
}
