//! Emulation of the engine's retired preserve-Z mode.
//!
//! Scenes persisted with the flag set must render identically under
//! the current engine, which no longer has the mode. The migration
//! rewrites such scenes once at read time: for every xform, the
//! amounts of all Z-preserving variations are summed and compensated
//! with a `zscale` variation, then the flag is cleared.
//!
//! No declarative "preserves Z" metadata exists, so the property is
//! observed empirically: each distinct function kind is probed through
//! the engine's own evaluation interface, and the verdict is memoized
//! process-wide.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use ember_engine::{
    EngineError, EngineFlame, EngineVariation, EngineXForm, VariationRegistry, XyzPoint,
};
use tracing::{debug, warn};

use crate::MapError;

/// Tolerance for probe comparison and compensation sums.
pub const EPSILON: f64 = 1e-10;

const ZSCALE_NAME: &str = "zscale";

const PROBE_POINT: XyzPoint = XyzPoint {
    x: 0.5,
    y: 0.25,
    z: 23.45,
};

/// Memoized empirical classification of variation-function kinds by
/// whether they preserve the Z coordinate.
///
/// The verdict depends only on the function kind, never on a
/// particular instance's parameters, so the cache is keyed by name.
/// It grows lazily, is never evicted, and tolerates racing probes for
/// the same name: the first writer wins and the loser only wasted two
/// evaluations.
#[derive(Default)]
pub struct ZPreserveClassifier {
    cache: Mutex<HashMap<String, bool>>,
}

impl ZPreserveClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this variation's function kind preserves Z.
    ///
    /// A function preserves Z iff, on a fixed probe point, evaluation
    /// with the preserve-Z execution flag set yields `z * amount` and
    /// evaluation with it cleared yields zero. A function whose
    /// evaluation fails is classified as non-preserving; under-
    /// compensating one uncertain kind beats failing the whole scene.
    pub fn preserves_z(&self, variation: &EngineVariation) -> bool {
        let name = variation.func.name();
        if let Some(&verdict) = self.lock().get(name) {
            return verdict;
        }
        let verdict = match probe(variation) {
            Ok(v) => v,
            Err(err) => {
                warn!(
                    variation = name,
                    error = %err,
                    "probe evaluation failed, classifying as non-preserving"
                );
                false
            }
        };
        debug!(variation = name, preserves_z = verdict, "classified variation");
        *self.lock().entry(name.to_owned()).or_insert(verdict)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, bool>> {
        // The cache holds only plain bools; a panic while holding the
        // lock cannot leave it inconsistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn probe(variation: &EngineVariation) -> Result<bool, EngineError> {
    let amount = variation.amount;
    let kept = variation.func.transform(PROBE_POINT, amount, true)?;
    let dropped = variation.func.transform(PROBE_POINT, amount, false)?;
    Ok((kept.z - PROBE_POINT.z * amount).abs() < EPSILON && dropped.z.abs() < EPSILON)
}

/// Rewrites a scene persisted under the retired preserve-Z mode into
/// an equivalent scene that does not rely on it, and clears the flag.
/// Scenes without the flag pass through untouched.
pub fn migrate_preserve_z(
    mut flame: EngineFlame,
    registry: &dyn VariationRegistry,
    classifier: &ZPreserveClassifier,
) -> Result<EngineFlame, MapError> {
    if !flame.preserve_z {
        return Ok(flame);
    }
    for layer in &mut flame.layers {
        for xform in layer.xforms.iter_mut().chain(layer.final_xforms.iter_mut()) {
            compensate_xform(xform, registry, classifier)?;
        }
    }
    flame.preserve_z = false;
    Ok(flame)
}

fn compensate_xform(
    xform: &mut EngineXForm,
    registry: &dyn VariationRegistry,
    classifier: &ZPreserveClassifier,
) -> Result<(), MapError> {
    let mut preserve_amount = 0.0;
    let mut zscale_idx = None;
    for (idx, variation) in xform.variations.iter().enumerate() {
        if zscale_idx.is_none() && variation.func.name() == ZSCALE_NAME {
            zscale_idx = Some(idx);
        }
        if classifier.preserves_z(variation) {
            preserve_amount += variation.amount;
        }
    }
    if preserve_amount.abs() > EPSILON {
        match zscale_idx {
            Some(idx) => xform.variations[idx].amount += preserve_amount,
            None => {
                let func = registry
                    .create(ZSCALE_NAME)
                    .ok_or_else(|| MapError::UnknownVariation(ZSCALE_NAME.to_owned()))?;
                xform.variations.push(EngineVariation::new(func, preserve_amount));
            }
        }
    }
    Ok(())
}
