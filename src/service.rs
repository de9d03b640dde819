//! Scene parsing and serialization facade.
//!
//! Sits between transport handlers and the mapping layer: engine flames
//! parsed from uploaded scene files are migrated off the legacy
//! preserve-Z flag before they are translated to the wire model, so the
//! frontend only ever sees post-migration scenes.

use std::sync::Arc;

use ember_engine::{EngineError, SceneCodec, VariationRegistry};
use ember_map::{migrate_preserve_z, wire_from_engine, MapError, ZPreserveClassifier};
use ember_wire::Flame;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Map(#[from] MapError),
    /// The uploaded document parsed cleanly but contained no scenes.
    #[error("document contains no flame")]
    EmptyDocument,
}

/// Parses scene files into wire flames and renders wire flames back to
/// the engine's native scene format.
pub struct SceneService {
    codec: Arc<dyn SceneCodec>,
    registry: Arc<dyn VariationRegistry>,
    classifier: ZPreserveClassifier,
}

impl SceneService {
    pub fn new(codec: Arc<dyn SceneCodec>, registry: Arc<dyn VariationRegistry>) -> Self {
        SceneService {
            codec,
            registry,
            classifier: ZPreserveClassifier::new(),
        }
    }

    /// Parses a scene document and returns its first flame.
    pub fn parse_scene(&self, text: &str) -> Result<Flame, ServiceError> {
        let mut flames = self.codec.parse(text)?;
        if flames.is_empty() {
            return Err(ServiceError::EmptyDocument);
        }
        let flame = flames.remove(0);
        let flame = migrate_preserve_z(flame, self.registry.as_ref(), &self.classifier)?;
        Ok(wire_from_engine(&flame))
    }

    /// Parses a scene document holding any number of flames, e.g. a
    /// whole gradient-pack or batch export.
    pub fn parse_scenes(&self, text: &str) -> Result<Vec<Flame>, ServiceError> {
        let flames = self.codec.parse(text)?;
        info!(count = flames.len(), "parsed scene document");
        flames
            .into_iter()
            .map(|flame| {
                let flame =
                    migrate_preserve_z(flame, self.registry.as_ref(), &self.classifier)?;
                Ok(wire_from_engine(&flame))
            })
            .collect()
    }

    /// Renders a wire flame to the engine's native scene format.
    pub fn scene_to_xml(&self, flame: &Flame) -> Result<String, ServiceError> {
        let engine = ember_map::engine_from_wire(flame, self.registry.as_ref())?;
        Ok(self.codec.serialize(&engine)?)
    }
}
