use ember_engine::{EngineLayer, Palette, Rgb, VariationRegistry};
use ember_wire::{Color, Layer, GRADIENT_SIZE};

use crate::{xform, MapError};

/// Decodes one engine layer: gradient index-for-index up to the
/// palette size, then the regular and final xform lists.
pub fn layer_from_engine(src: &EngineLayer) -> Layer {
    let mut res = Layer {
        weight: src.weight,
        density: src.density,
        ..Layer::default()
    };
    for i in 0..src.palette.size() {
        let c = src.palette.color(i);
        res.gradient.push(Color::new(c.r, c.g, c.b));
    }
    res.xforms = src
        .xforms
        .iter()
        .map(|x| xform::xform_from_engine(src, x))
        .collect();
    res.final_xforms = src
        .final_xforms
        .iter()
        .map(|x| xform::xform_from_engine(src, x))
        .collect();
    res
}

/// Encodes one wire layer into a fresh engine layer.
pub fn layer_to_engine(src: &Layer, registry: &dyn VariationRegistry) -> Result<EngineLayer, MapError> {
    let mut res = EngineLayer {
        weight: src.weight,
        density: src.density,
        palette: Palette::new(src.gradient.len().min(GRADIENT_SIZE)),
        ..EngineLayer::default()
    };
    for (i, color) in src.gradient.iter().enumerate() {
        res.palette.set_color(i, Rgb::new(color.r, color.g, color.b));
    }
    for x in &src.xforms {
        res.xforms.push(xform::xform_to_engine(src, x, registry)?);
    }
    for x in &src.final_xforms {
        res.final_xforms
            .push(xform::xform_to_engine(src, x, registry)?);
    }
    Ok(res)
}
