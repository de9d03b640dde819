use ember_engine::{EngineVariation, ParamKind, ParamSpec, ParamValue, VariationRegistry};
use ember_wire::{Variation, VariationParam};
use tracing::warn;

use crate::{param, MapError};

/// Decodes one engine variation.
///
/// The declared parameter list of the function drives the walk; only
/// parameters with a present value are emitted. Parameter curves are
/// looked up by parameter name.
pub fn variation_from_engine(src: &EngineVariation) -> Variation {
    let name = src.func.name().to_owned();
    let mut res = Variation {
        name,
        amount: param::float_from_engine(src.amount, Some(&src.amount_curve)),
        params: Vec::new(),
    };
    for spec in src.func.parameters() {
        let curve = src.param_curves.get(&spec.name);
        let value = match spec.kind {
            ParamKind::Resource => {
                // Resource references (image data etc.) are outside
                // the numeric mapping layer; known incompleteness.
                warn!(
                    variation = %res.name,
                    param = %spec.name,
                    "skipping resource parameter, not representable on the wire"
                );
                continue;
            }
            ParamKind::Int => match src.func.param(&spec.name) {
                Some(v) => param::int_from_engine(value_as_i32(v), curve),
                None => continue,
            },
            ParamKind::Float => match src.func.param(&spec.name) {
                Some(v) => param::float_from_engine(value_as_f64(v), curve),
                None => continue,
            },
        };
        res.params.push(VariationParam {
            name: spec.name.clone(),
            value,
        });
    }
    res
}

/// Encodes one wire variation into a fresh engine variation.
///
/// The function is resolved by name through the registry; an unknown
/// name fails the call before any engine structure is handed out.
/// The registry-declared data type of each parameter is authoritative:
/// a wire value of the other numeric type is coerced, never re-typed.
pub fn variation_to_engine(
    src: &Variation,
    registry: &dyn VariationRegistry,
) -> Result<EngineVariation, MapError> {
    let func = registry
        .create(&src.name)
        .ok_or_else(|| MapError::UnknownVariation(src.name.clone()))?;
    let mut res = EngineVariation::new(func, 0.0);

    let amount = param::float_to_engine(&src.amount)?;
    res.amount = amount.value;
    amount.curve.apply_to(&mut res.amount_curve);

    let specs: Vec<ParamSpec> = res.func.parameters().to_vec();
    for p in &src.params {
        let Some(spec) = specs.iter().find(|s| s.name == p.name) else {
            warn!(
                variation = %src.name,
                param = %p.name,
                "dropping parameter the registry does not declare"
            );
            continue;
        };
        match spec.kind {
            ParamKind::Resource => {
                warn!(
                    variation = %src.name,
                    param = %p.name,
                    "skipping resource parameter, not representable on the wire"
                );
            }
            ParamKind::Int => {
                let encoded = param::int_to_engine(&p.value)?;
                encoded.curve.apply_keyed(&mut res.param_curves, &p.name);
                res.func.set_param(&p.name, ParamValue::Int(encoded.value));
            }
            ParamKind::Float => {
                let encoded = param::float_to_engine(&p.value)?;
                encoded.curve.apply_keyed(&mut res.param_curves, &p.name);
                res.func.set_param(&p.name, ParamValue::Float(encoded.value));
            }
        }
    }
    Ok(res)
}

fn value_as_f64(value: ParamValue) -> f64 {
    match value {
        ParamValue::Float(v) => v,
        ParamValue::Int(v) => v as f64,
    }
}

fn value_as_i32(value: ParamValue) -> i32 {
    match value {
        ParamValue::Int(v) => v,
        ParamValue::Float(v) => v as i32,
    }
}
