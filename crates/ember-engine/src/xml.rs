use crate::errors::EngineError;
use crate::model::EngineFlame;

/// Black-box XML serialization of engine scenes.
///
/// The flame XML format belongs to the external engine; this layer
/// treats it as opaque text.
pub trait SceneCodec: Send + Sync {
    /// Parses all scenes contained in `text`, in document order.
    fn parse(&self, text: &str) -> Result<Vec<EngineFlame>, EngineError>;

    /// Serializes one scene back to the engine's XML format.
    fn serialize(&self, flame: &EngineFlame) -> Result<String, EngineError>;
}
