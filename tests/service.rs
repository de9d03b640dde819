//! SceneService end to end over stub codec and registry.

use std::sync::Arc;

use ember_studio::engine::{
    EngineError, EngineFlame, EngineLayer, EngineVariation, EngineXForm, ParamSpec, ParamValue,
    SceneCodec, VariationFunc, VariationRegistry, XyzPoint,
};
use ember_studio::{SceneService, ServiceError};

/// Conditional Z handling when `legacy` is set, 3D-aware otherwise.
struct StubFunc {
    name: &'static str,
    legacy: bool,
}

impl VariationFunc for StubFunc {
    fn name(&self) -> &str {
        self.name
    }

    fn parameters(&self) -> &[ParamSpec] {
        &[]
    }

    fn param(&self, _name: &str) -> Option<ParamValue> {
        None
    }

    fn set_param(&mut self, _name: &str, _value: ParamValue) {}

    fn transform(
        &self,
        point: XyzPoint,
        amount: f64,
        preserve_z: bool,
    ) -> Result<XyzPoint, EngineError> {
        let z = if self.legacy && !preserve_z {
            0.0
        } else {
            amount * point.z
        };
        Ok(XyzPoint::new(amount * point.x, amount * point.y, z))
    }
}

struct StubRegistry;

impl VariationRegistry for StubRegistry {
    fn create(&self, name: &str) -> Option<Box<dyn VariationFunc>> {
        match name {
            "identityZ" => Some(Box::new(StubFunc {
                name: "identityZ",
                legacy: true,
            })),
            "zscale" => Some(Box::new(StubFunc {
                name: "zscale",
                legacy: false,
            })),
            _ => None,
        }
    }
}

/// Scene "format": one flame per non-empty line, the line being the
/// flame name. A trailing `!legacy` marks the flame as preserve-Z.
struct LineCodec;

impl SceneCodec for LineCodec {
    fn parse(&self, text: &str) -> Result<Vec<EngineFlame>, EngineError> {
        if text.contains('<') {
            return Err(EngineError::Parse("unexpected markup".to_owned()));
        }
        Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let legacy = line.ends_with("!legacy");
                let name = line.trim_end_matches("!legacy").trim();
                let mut xform = EngineXForm::default();
                xform.variations.push(EngineVariation::new(
                    StubRegistry.create("identityZ").unwrap(),
                    0.6,
                ));
                let mut layer = EngineLayer::default();
                layer.xforms.push(xform);
                EngineFlame {
                    name: name.to_owned(),
                    preserve_z: legacy,
                    layers: vec![layer],
                    ..EngineFlame::default()
                }
            })
            .collect())
    }

    fn serialize(&self, flame: &EngineFlame) -> Result<String, EngineError> {
        Ok(format!("{}\n", flame.name))
    }
}

fn service() -> SceneService {
    SceneService::new(Arc::new(LineCodec), Arc::new(StubRegistry))
}

#[test]
fn parse_scene_returns_first_flame() {
    let flame = service().parse_scene("alpha\nbeta\n").unwrap();
    assert_eq!(flame.name, "alpha");
    assert_eq!(flame.layers.len(), 1);
}

#[test]
fn parse_scene_migrates_legacy_flames() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let flame = service().parse_scene("old !legacy").unwrap();
    let names: Vec<&str> = flame.layers[0].xforms[0]
        .variations
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, ["identityZ", "zscale"]);
    assert_eq!(flame.layers[0].xforms[0].variations[1].amount.as_f64(), 0.6);
}

#[test]
fn parse_scene_leaves_modern_flames_alone() {
    let flame = service().parse_scene("new").unwrap();
    let names: Vec<&str> = flame.layers[0].xforms[0]
        .variations
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, ["identityZ"]);
}

#[test]
fn empty_document_is_an_error() {
    assert!(matches!(
        service().parse_scene("   \n"),
        Err(ServiceError::EmptyDocument)
    ));
}

#[test]
fn parse_failures_propagate() {
    assert!(matches!(
        service().parse_scene("<not-a-scene>"),
        Err(ServiceError::Engine(EngineError::Parse(_)))
    ));
}

#[test]
fn parse_scenes_maps_every_flame() {
    let flames = service().parse_scenes("one\ntwo !legacy\nthree\n").unwrap();
    assert_eq!(flames.len(), 3);
    assert_eq!(flames[1].name, "two");
    assert_eq!(flames[1].layers[0].xforms[0].variations.len(), 2);
}

#[test]
fn parsed_flames_serialize_for_the_frontend() {
    let flame = service().parse_scene("delta").unwrap();
    let json = serde_json::to_value(&flame).unwrap();
    assert_eq!(json["name"], "delta");
    assert_eq!(json["layers"][0]["xforms"][0]["variations"][0]["name"], "identityZ");
}

#[test]
fn round_trips_back_to_scene_text() {
    let svc = service();
    let flame = svc.parse_scene("gamma").unwrap();
    assert_eq!(svc.scene_to_xml(&flame).unwrap(), "gamma\n");
}
