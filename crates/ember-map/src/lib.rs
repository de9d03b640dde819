//! Bidirectional mapping between the wire scene model (`ember-wire`)
//! and the external engine's scene model (`ember-engine`), plus the
//! one-shot migration that emulates the engine's retired preserve-Z
//! mode.
//!
//! Data flows one of two ways: inbound (wire to engine) for edits
//! submitted by a client, and outbound (engine to wire) for scenes
//! produced by parsing or generation, which always pass through
//! [`legacy::migrate_preserve_z`] first.
//!
//! Every mapping call builds fresh structures owned by the caller;
//! the only shared state in this crate is the Z-preservation
//! classification cache ([`legacy::ZPreserveClassifier`]).

/// Keyframe curve codec between wire and engine representations.
pub mod curve;

/// Scalar-or-curve duality mapping for single numeric attributes.
pub mod param;

/// Variation mapping against the engine's function registry.
pub mod variation;

/// Transform-node mapping: affine groups, weights, variations.
pub mod xform;

/// Layer mapping: gradient plus xform lists.
pub mod layer;

/// Whole-scene mapping, the produced contract of this crate.
pub mod flame;

/// Legacy preserve-Z migration and its classification cache.
pub mod legacy;

mod errors;

pub use errors::MapError;
pub use flame::{engine_from_wire, wire_from_engine};
pub use legacy::{migrate_preserve_z, ZPreserveClassifier};
