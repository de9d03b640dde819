//! Serde structs for the client-facing flame scene model.

pub mod model;
pub mod param;

pub use model::{
    AffineGroup, Color, Flame, Layer, Variation, VariationParam, XForm, GRADIENT_SIZE,
};
pub use param::{CurveInterpolation, FlameParam, ParamCurve, ParamDataType};

#[cfg(test)]
mod tests {
    use super::model::*;
    use super::param::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_scalar_param() {
        let data = json!({ "mode": "floatScalar", "value": 1.25 });
        let param: FlameParam = serde_json::from_value(data).unwrap();
        assert_eq!(param, FlameParam::float_scalar(1.25));
        assert_eq!(param.data_type(), ParamDataType::Float);
        assert!(param.curve().is_none());
    }

    #[test]
    fn test_deserialize_curve_param() {
        let data = json!({
            "mode": "intCurve",
            "value": 3,
            "curve": {
                "viewXMin": 0,
                "viewXMax": 70,
                "viewYMin": -120.0,
                "viewYMax": 120.0,
                "interpolation": "bezier",
                "selectedIdx": 1,
                "x": [0, 25, 50],
                "y": [0.0, 4.0, 8.0],
                "locked": false
            }
        });
        let param: FlameParam = serde_json::from_value(data).unwrap();
        assert_eq!(param.data_type(), ParamDataType::Int);
        let curve = param.curve().expect("curve variant carries a curve");
        assert_eq!(curve.interpolation, CurveInterpolation::Bezier);
        assert_eq!(curve.x, vec![0, 25, 50]);
        assert_eq!(curve.y.len(), 3);
    }

    #[test]
    fn test_deserialize_minimal_flame() {
        let data = json!({
            "brightness": 1.0,
            "width": 512,
            "height": 512,
            "camZoom": { "mode": "floatScalar", "value": 1.0 },
            "layers": [
                {
                    "weight": 1.0,
                    "density": 1.0,
                    "gradient": [ { "r": 255, "g": 128, "b": 0 } ],
                    "xforms": [],
                    "finalXforms": []
                }
            ]
        });
        let flame: Flame = serde_json::from_value(data).unwrap();
        assert_eq!(flame.width, 512);
        assert_eq!(flame.layers.len(), 1);
        assert_eq!(flame.layers[0].gradient[0], Color { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn test_affine_group_reexported_at_crate_root() {
        let group = crate::AffineGroup::default();
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["c00"]["value"], 1.0);
        assert_eq!(json["scale"]["value"], 1.0);
        assert_eq!(json["rotate"]["mode"], "floatScalar");
    }

    #[test]
    fn test_default_flame_roundtrips_through_json() {
        let flame = Flame::default();
        let text = serde_json::to_string(&flame).unwrap();
        let back: Flame = serde_json::from_str(&text).unwrap();
        assert_eq!(flame, back);
    }
}
