use crate::errors::EngineError;

/// A point in the engine's transform space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XyzPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        XyzPoint { x, y, z }
    }
}

/// Declared kind of a variation parameter.
///
/// `Resource` marks parameters whose value is a non-numeric resource
/// reference (image data, curves files). Those are outside the numeric
/// mapping layer and are skipped with a warning there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Float,
    Resource,
}

/// One declared parameter of a variation function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        ParamSpec {
            name: name.into(),
            kind,
        }
    }
}

/// A current parameter value held by a variation-function instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(i32),
    Float(f64),
}

/// A named functional primitive applied to a point with a scalar
/// amount and named typed parameters.
///
/// Instances are created through a [`VariationRegistry`] and carry
/// their own parameter state. `set_param` ignores names the function
/// does not declare; the engine validates values internally.
pub trait VariationFunc: Send + Sync {
    fn name(&self) -> &str;

    /// Declared parameter list; names and kinds are authoritative for
    /// the wire mapping of this function's parameters.
    fn parameters(&self) -> &[ParamSpec];

    fn param(&self, name: &str) -> Option<ParamValue>;

    fn set_param(&mut self, name: &str, value: ParamValue);

    /// Applies the variation to `point` with the given amount. The
    /// `preserve_z` flag selects the engine's legacy Z execution mode;
    /// it exists on this interface solely so callers can observe how a
    /// function treats the Z coordinate.
    fn transform(&self, point: XyzPoint, amount: f64, preserve_z: bool)
        -> Result<XyzPoint, EngineError>;
}

/// Lookup of variation functions by name.
///
/// Returns `None` for names the engine does not register; callers
/// surface that as their own typed failure.
pub trait VariationRegistry: Send + Sync {
    fn create(&self, name: &str) -> Option<Box<dyn VariationFunc>>;
}
