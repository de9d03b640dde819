use std::collections::BTreeMap;

use ember_engine::MotionCurve;
use ember_wire::FlameParam;

use crate::{curve, MapError};

/// The curve half of an encoded param: what should happen to the
/// destination curve container the caller owns.
///
/// Encoding itself is pure; mutation of engine state happens only when
/// the caller applies the command to a slot it owns. This keeps the
/// engine's "no curve is a disabled container" convention at the
/// boundary instead of inside the mapper.
#[derive(Debug, PartialEq)]
pub enum CurveUpdate {
    /// Flag the destination disabled and touch nothing else.
    Disable,
    /// Replace the destination wholesale with an enabled curve.
    Install(MotionCurve),
}

impl CurveUpdate {
    /// Applies the command to a first-class curve container.
    pub fn apply_to(self, dest: &mut MotionCurve) {
        match self {
            CurveUpdate::Disable => dest.enabled = false,
            CurveUpdate::Install(curve) => *dest = curve,
        }
    }

    /// Applies the command to a name-keyed curve map, creating the
    /// backing container on demand for an install and leaving absent
    /// entries absent for a disable.
    pub fn apply_keyed(self, curves: &mut BTreeMap<String, MotionCurve>, key: &str) {
        match self {
            CurveUpdate::Disable => {
                if let Some(existing) = curves.get_mut(key) {
                    existing.enabled = false;
                }
            }
            CurveUpdate::Install(curve) => {
                curves.insert(key.to_owned(), curve);
            }
        }
    }
}

/// Result of encoding one wire param: the scalar to store in the
/// engine plus the curve-update command for its curve slot.
#[derive(Debug)]
pub struct Encoded<T> {
    pub value: T,
    pub curve: CurveUpdate,
}

/// Decodes a float attribute. An absent or disabled engine curve
/// yields a scalar param; an enabled one yields a curve param that
/// keeps the engine scalar as its base value.
pub fn float_from_engine(value: f64, curve: Option<&MotionCurve>) -> FlameParam {
    match curve {
        Some(c) if c.enabled => FlameParam::float_curve(value, curve::curve_from_engine(c)),
        _ => FlameParam::float_scalar(value),
    }
}

/// Int twin of [`float_from_engine`].
pub fn int_from_engine(value: i32, curve: Option<&MotionCurve>) -> FlameParam {
    match curve {
        Some(c) if c.enabled => FlameParam::int_curve(value, curve::curve_from_engine(c)),
        _ => FlameParam::int_scalar(value),
    }
}

/// Encodes a float attribute. Must be invoked attribute-by-attribute;
/// each attribute owns a distinct engine curve slot with its own
/// enabled state, so there is no batch form.
pub fn float_to_engine(param: &FlameParam) -> Result<Encoded<f64>, MapError> {
    Ok(Encoded {
        value: param.as_f64(),
        curve: encode_curve(param)?,
    })
}

/// Int twin of [`float_to_engine`].
pub fn int_to_engine(param: &FlameParam) -> Result<Encoded<i32>, MapError> {
    Ok(Encoded {
        value: param.as_i32(),
        curve: encode_curve(param)?,
    })
}

fn encode_curve(param: &FlameParam) -> Result<CurveUpdate, MapError> {
    match param.curve() {
        Some(c) => Ok(CurveUpdate::Install(curve::curve_to_engine(c)?)),
        None => Ok(CurveUpdate::Disable),
    }
}
