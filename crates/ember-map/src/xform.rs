use std::collections::BTreeMap;

use ember_engine::{EngineLayer, EngineXForm, MotionCurve, VariationRegistry};
use ember_wire::{AffineGroup, FlameParam, Layer, XForm};

use crate::{param, variation, MapError};

// Curve keys follow the engine's property naming: plane prefix plus
// coefficient suffix, e.g. "xyC00", "zxPScale".

fn affine_from_engine(
    coeffs: &[f64; 6],
    curves: &BTreeMap<String, MotionCurve>,
    prefix: &str,
) -> AffineGroup {
    let get = |suffix: &str| curves.get(&format!("{prefix}{suffix}"));
    AffineGroup {
        c00: param::float_from_engine(coeffs[0], get("00")),
        c01: param::float_from_engine(coeffs[1], get("01")),
        c10: param::float_from_engine(coeffs[2], get("10")),
        c11: param::float_from_engine(coeffs[3], get("11")),
        c20: param::float_from_engine(coeffs[4], get("20")),
        c21: param::float_from_engine(coeffs[5], get("21")),
        // The engine holds rotate/scale only as curves, so their
        // scalar bases are fixed defaults rather than engine state.
        rotate: param::float_from_engine(0.0, get("Rotate")),
        scale: param::float_from_engine(1.0, get("Scale")),
    }
}

fn affine_to_engine(
    src: &AffineGroup,
    coeffs: &mut [f64; 6],
    curves: &mut BTreeMap<String, MotionCurve>,
    prefix: &str,
) -> Result<(), MapError> {
    let entries: [(&str, &FlameParam); 6] = [
        ("00", &src.c00),
        ("01", &src.c01),
        ("10", &src.c10),
        ("11", &src.c11),
        ("20", &src.c20),
        ("21", &src.c21),
    ];
    for (idx, (suffix, p)) in entries.into_iter().enumerate() {
        let encoded = param::float_to_engine(p)?;
        coeffs[idx] = encoded.value;
        encoded
            .curve
            .apply_keyed(curves, &format!("{prefix}{suffix}"));
    }
    // Rotate/scale write only their curve halves; the engine has no
    // scalar slot for them.
    param::float_to_engine(&src.rotate)?
        .curve
        .apply_keyed(curves, &format!("{prefix}Rotate"));
    param::float_to_engine(&src.scale)?
        .curve
        .apply_keyed(curves, &format!("{prefix}Scale"));
    Ok(())
}

/// Decodes one engine xform. The owning layer supplies the sibling
/// count the modified-weight list is aligned against.
pub fn xform_from_engine(layer: &EngineLayer, src: &EngineXForm) -> XForm {
    let keep = layer.xforms.len().min(src.modified_weights.len());
    XForm {
        weight: src.weight,
        color: src.color,
        color_symmetry: src.color_symmetry,
        modified_weights: src.modified_weights[..keep].to_vec(),
        xy: affine_from_engine(&src.xy_coeffs, &src.curves, "xyC"),
        yz: affine_from_engine(&src.yz_coeffs, &src.curves, "yzC"),
        zx: affine_from_engine(&src.zx_coeffs, &src.curves, "zxC"),
        xy_post: affine_from_engine(&src.xy_post, &src.curves, "xyP"),
        yz_post: affine_from_engine(&src.yz_post, &src.curves, "yzP"),
        zx_post: affine_from_engine(&src.zx_post, &src.curves, "zxP"),
        variations: src
            .variations
            .iter()
            .map(variation::variation_from_engine)
            .collect(),
    }
}

/// Encodes one wire xform into a fresh engine xform.
///
/// The engine's weight vector is a fixed-length array sized to the
/// layer, while the wire list is variable-length: the destination is
/// zero-filled first, then the leading entries are overwritten.
pub fn xform_to_engine(
    layer: &Layer,
    src: &XForm,
    registry: &dyn VariationRegistry,
) -> Result<EngineXForm, MapError> {
    let mut res = EngineXForm {
        weight: src.weight,
        color: src.color,
        color_symmetry: src.color_symmetry,
        modified_weights: vec![0.0; layer.xforms.len()],
        ..EngineXForm::default()
    };
    let keep = res.modified_weights.len().min(src.modified_weights.len());
    res.modified_weights[..keep].copy_from_slice(&src.modified_weights[..keep]);

    affine_to_engine(&src.xy, &mut res.xy_coeffs, &mut res.curves, "xyC")?;
    affine_to_engine(&src.yz, &mut res.yz_coeffs, &mut res.curves, "yzC")?;
    affine_to_engine(&src.zx, &mut res.zx_coeffs, &mut res.curves, "zxC")?;
    affine_to_engine(&src.xy_post, &mut res.xy_post, &mut res.curves, "xyP")?;
    affine_to_engine(&src.yz_post, &mut res.yz_post, &mut res.curves, "yzP")?;
    affine_to_engine(&src.zx_post, &mut res.zx_post, &mut res.curves, "zxP")?;

    for v in &src.variations {
        res.variations
            .push(variation::variation_to_engine(v, registry)?);
    }
    Ok(res)
}
