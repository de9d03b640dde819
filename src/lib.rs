//! Backend glue for a browser-based fractal flame editor.
//!
//! The heavy lifting lives in the member crates: [`wire`] defines the
//! JSON scene graph exchanged with the frontend, [`engine`] the traits
//! and models of the rendering engine boundary, and [`map`] the
//! bidirectional translation between the two. This crate adds the
//! service layer on top: parsing uploaded scene files into wire flames
//! (running the legacy preserve-Z migration on the way in) and holding
//! short-lived upload state.

pub use ember_engine as engine;
pub use ember_map as map;
pub use ember_wire as wire;

pub mod service;
pub mod upload;

pub use service::{SceneService, ServiceError};
pub use upload::{StoredUpload, TempUploadStore, UploadError};
