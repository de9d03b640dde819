use ember_engine::{EngineInterpolation, MotionCurve};
use ember_wire::{CurveInterpolation, ParamCurve};

use crate::MapError;

/// Decodes an engine curve into its wire form.
///
/// Point arrays are copied by value so neither side can mutate the
/// other's keyframes. Interpolation modes the wire model does not
/// carry decode as spline; that is forward compatibility, not an
/// error.
pub fn curve_from_engine(src: &MotionCurve) -> ParamCurve {
    ParamCurve {
        view_x_min: src.view_x_min,
        view_x_max: src.view_x_max,
        view_y_min: src.view_y_min,
        view_y_max: src.view_y_max,
        interpolation: interpolation_from_engine(src.interpolation),
        selected_idx: src.selected_idx,
        x: src.x.clone(),
        y: src.y.clone(),
        locked: src.locked,
    }
}

/// Encodes a wire curve into a fresh, enabled engine curve.
///
/// The result replaces the destination container wholesale; nothing
/// is merged. Mismatched point arrays are rejected before any engine
/// state is produced.
pub fn curve_to_engine(src: &ParamCurve) -> Result<MotionCurve, MapError> {
    if src.x.len() != src.y.len() {
        return Err(MapError::MalformedCurve {
            x_len: src.x.len(),
            y_len: src.y.len(),
        });
    }
    Ok(MotionCurve {
        enabled: true,
        view_x_min: src.view_x_min,
        view_x_max: src.view_x_max,
        view_y_min: src.view_y_min,
        view_y_max: src.view_y_max,
        interpolation: interpolation_to_engine(src.interpolation),
        selected_idx: src.selected_idx,
        x: src.x.clone(),
        y: src.y.clone(),
        locked: src.locked,
    })
}

fn interpolation_from_engine(src: EngineInterpolation) -> CurveInterpolation {
    match src {
        EngineInterpolation::Linear => CurveInterpolation::Linear,
        EngineInterpolation::Bezier => CurveInterpolation::Bezier,
        // Spline is the fallback for modes the wire model does not know.
        _ => CurveInterpolation::Spline,
    }
}

fn interpolation_to_engine(src: CurveInterpolation) -> EngineInterpolation {
    match src {
        CurveInterpolation::Linear => EngineInterpolation::Linear,
        CurveInterpolation::Bezier => EngineInterpolation::Bezier,
        CurveInterpolation::Spline => EngineInterpolation::Spline,
    }
}
