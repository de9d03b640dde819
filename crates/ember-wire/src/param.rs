use serde::{Deserialize, Serialize};

/// Interpolation modes for keyframe curves.
///
/// The engine may know more modes than these; anything the wire model
/// does not recognize decodes as [`CurveInterpolation::Spline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveInterpolation {
    Linear,
    Bezier,
    #[default]
    Spline,
}

/// A keyframe animation track driving a numeric attribute over time.
///
/// `x` holds discrete keyframe positions, `y` the values at those
/// positions. Both arrays must have the same length; ascending `x` is
/// expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamCurve {
    pub view_x_min: i32,
    pub view_x_max: i32,
    pub view_y_min: f64,
    pub view_y_max: f64,
    pub interpolation: CurveInterpolation,
    pub selected_idx: i32,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub locked: bool,
}

impl Default for ParamCurve {
    fn default() -> Self {
        ParamCurve {
            view_x_min: 0,
            view_x_max: 70,
            view_y_min: -120.0,
            view_y_max: 120.0,
            interpolation: CurveInterpolation::default(),
            selected_idx: 0,
            x: Vec::new(),
            y: Vec::new(),
            locked: false,
        }
    }
}

/// Declared data type of a curve-capable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDataType {
    Int,
    Float,
}

/// A numeric attribute that is either a constant scalar or driven by a
/// keyframe curve.
///
/// The curve variants carry their curve structurally, so a
/// curve-tagged param without curve data is unrepresentable. The
/// scalar value is always present and serves as the fallback/base
/// value when curve evaluation does not take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FlameParam {
    FloatScalar { value: f64 },
    FloatCurve { value: f64, curve: ParamCurve },
    IntScalar { value: i32 },
    IntCurve { value: i32, curve: ParamCurve },
}

impl FlameParam {
    pub fn float_scalar(value: f64) -> Self {
        FlameParam::FloatScalar { value }
    }

    pub fn int_scalar(value: i32) -> Self {
        FlameParam::IntScalar { value }
    }

    pub fn float_curve(value: f64, curve: ParamCurve) -> Self {
        FlameParam::FloatCurve { value, curve }
    }

    pub fn int_curve(value: i32, curve: ParamCurve) -> Self {
        FlameParam::IntCurve { value, curve }
    }

    pub fn data_type(&self) -> ParamDataType {
        match self {
            FlameParam::FloatScalar { .. } | FlameParam::FloatCurve { .. } => ParamDataType::Float,
            FlameParam::IntScalar { .. } | FlameParam::IntCurve { .. } => ParamDataType::Int,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            FlameParam::FloatCurve { .. } | FlameParam::IntCurve { .. }
        )
    }

    pub fn curve(&self) -> Option<&ParamCurve> {
        match self {
            FlameParam::FloatCurve { curve, .. } | FlameParam::IntCurve { curve, .. } => {
                Some(curve)
            }
            FlameParam::FloatScalar { .. } | FlameParam::IntScalar { .. } => None,
        }
    }

    /// Base value as a float, coercing int-typed params.
    pub fn as_f64(&self) -> f64 {
        match *self {
            FlameParam::FloatScalar { value } | FlameParam::FloatCurve { value, .. } => value,
            FlameParam::IntScalar { value } | FlameParam::IntCurve { value, .. } => value as f64,
        }
    }

    /// Base value as an int, truncating float-typed params.
    pub fn as_i32(&self) -> i32 {
        match *self {
            FlameParam::IntScalar { value } | FlameParam::IntCurve { value, .. } => value,
            FlameParam::FloatScalar { value } | FlameParam::FloatCurve { value, .. } => {
                value as i32
            }
        }
    }
}

impl Default for FlameParam {
    fn default() -> Self {
        FlameParam::FloatScalar { value: 0.0 }
    }
}
