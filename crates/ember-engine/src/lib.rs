//! Boundary types and traits for the external flame rendering engine.
//!
//! The rendering/variation-function engine itself is an external
//! library; this crate pins down only the surface the mapping layer
//! touches: the engine-side scene model (the attributes that are read
//! and written during wire mapping), the variation-function registry,
//! and the opaque XML scene codec. A real engine binding implements
//! the traits here; tests use small in-memory stand-ins.

/// Engine-side scene model structs.
pub mod model;

/// Variation-function registry and evaluation interface.
pub mod variation;

/// Opaque XML scene serialization boundary.
pub mod xml;

mod errors;

pub use errors::EngineError;
pub use model::{
    EngineFlame, EngineInterpolation, EngineLayer, EngineVariation, EngineXForm, MotionCurve,
    Palette, Rgb,
};
pub use variation::{ParamKind, ParamSpec, ParamValue, VariationFunc, VariationRegistry, XyzPoint};
pub use xml::SceneCodec;
