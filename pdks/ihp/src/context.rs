//! Generator memoization.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arcstr::ArcStr;
use serde::Serialize;

use crate::error::Result;
use crate::IhpCell;

/// A parametric layout generator.
///
/// The serialized form of the generator is its identity in the cache:
/// two generators of the same type with the same serialized
/// parameters must produce the same cell. Floats are keyed by value,
/// so `NaN`, `inf` and `-inf` parameters remain distinct.
pub trait Generator: Serialize + Any {
    /// A short name for the generated cell, used in logs.
    fn name(&self) -> ArcStr;

    /// Builds the cell.
    ///
    /// Sub-cells should be obtained through `ctx` so that they are shared.
    fn generate(&self, ctx: &Context) -> Result<IhpCell>;
}

type CacheKey = (TypeId, Vec<u8>);

/// A cache of generated cells.
///
/// Cloning a context yields a handle to the same cache.
#[derive(Debug, Default, Clone)]
pub struct Context {
    cells: Arc<Mutex<HashMap<CacheKey, Arc<IhpCell>>>>,
}

impl Context {
    /// Creates a context with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the cell described by `generator`, or returns the
    /// previously generated cell for identical parameters.
    ///
    /// Generation itself runs without holding the cache lock. If two threads
    /// race on the same parameters, both receive the cell that was cached first.
    pub fn generate<G: Generator>(&self, generator: &G) -> Result<Arc<IhpCell>> {
        let key = (TypeId::of::<G>(), flexbuffers::to_vec(generator)?);

        if let Some(cell) = self.lock().get(&key) {
            tracing::trace!(cell = %generator.name(), "cache hit");
            return Ok(cell.clone());
        }

        let cell = Arc::new(generator.generate(self)?);
        let cell = self.lock().entry(key).or_insert(cell).clone();
        Ok(cell)
    }

    /// The number of distinct cells generated through this context.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no cells have been generated through this context.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<IhpCell>>> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent.
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
