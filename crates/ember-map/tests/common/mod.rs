//! In-memory stand-ins for the external engine's variation registry.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ember_engine::{
    EngineError, ParamKind, ParamSpec, ParamValue, VariationFunc, VariationRegistry, XyzPoint,
};

/// Routes tracing output through the test harness so skipped-param
/// and classification warnings show up in failing test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// How a stub function treats the Z coordinate.
#[derive(Debug, Clone, Copy)]
pub enum ZBehavior {
    /// Z scaled by amount only when the preserve-Z execution flag is
    /// set, zeroed otherwise (legacy-conditional functions).
    Conditional,
    /// Z always scaled by amount (3D-aware functions, zscale).
    Always,
    /// Evaluation fails outright.
    Failing,
}

pub struct StubFunc {
    name: &'static str,
    specs: Vec<ParamSpec>,
    values: BTreeMap<String, ParamValue>,
    z: ZBehavior,
    transforms: Arc<AtomicUsize>,
}

impl StubFunc {
    pub fn new(name: &'static str, z: ZBehavior) -> Self {
        StubFunc {
            name,
            specs: Vec::new(),
            values: BTreeMap::new(),
            z,
            transforms: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_param(mut self, name: &str, kind: ParamKind, value: Option<ParamValue>) -> Self {
        self.specs.push(ParamSpec::new(name, kind));
        if let Some(v) = value {
            self.values.insert(name.to_owned(), v);
        }
        self
    }

    /// Shares a counter of `transform` invocations, for observing how
    /// often classification actually probes.
    pub fn with_transform_counter(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.transforms = counter;
        self
    }
}

impl VariationFunc for StubFunc {
    fn name(&self) -> &str {
        self.name
    }

    fn parameters(&self) -> &[ParamSpec] {
        &self.specs
    }

    fn param(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    fn set_param(&mut self, name: &str, value: ParamValue) {
        if self.specs.iter().any(|s| s.name == name) {
            self.values.insert(name.to_owned(), value);
        }
    }

    fn transform(
        &self,
        point: XyzPoint,
        amount: f64,
        preserve_z: bool,
    ) -> Result<XyzPoint, EngineError> {
        self.transforms.fetch_add(1, Ordering::SeqCst);
        match self.z {
            ZBehavior::Failing => Err(EngineError::Evaluation(format!(
                "{} needs a full render context",
                self.name
            ))),
            ZBehavior::Always => Ok(XyzPoint::new(
                amount * point.x,
                amount * point.y,
                amount * point.z,
            )),
            ZBehavior::Conditional => Ok(XyzPoint::new(
                amount * point.x,
                amount * point.y,
                if preserve_z { amount * point.z } else { 0.0 },
            )),
        }
    }
}

/// Registry with a handful of representative function kinds.
pub struct StubRegistry;

impl VariationRegistry for StubRegistry {
    fn create(&self, name: &str) -> Option<Box<dyn VariationFunc>> {
        let func = match name {
            // 3D-aware: writes Z unconditionally, so not Z-preserving.
            "linear3D" => StubFunc::new("linear3D", ZBehavior::Always),
            "zscale" => StubFunc::new("zscale", ZBehavior::Always),
            // Legacy-conditional: honors the preserve-Z execution flag.
            "identityZ" => StubFunc::new("identityZ", ZBehavior::Conditional),
            "julian" => StubFunc::new("julian", ZBehavior::Conditional)
                .with_param("power", ParamKind::Int, Some(ParamValue::Int(3)))
                .with_param("dist", ParamKind::Float, Some(ParamValue::Float(1.0))),
            // Fails outside a real render context.
            "crackle" => StubFunc::new("crackle", ZBehavior::Failing),
            // Carries a resource-typed parameter next to a numeric one.
            "colormap_wf" => StubFunc::new("colormap_wf", ZBehavior::Conditional)
                .with_param("blend", ParamKind::Float, Some(ParamValue::Float(0.5)))
                .with_param("image", ParamKind::Resource, None),
            _ => return None,
        };
        Some(Box::new(func))
    }
}

/// Registry that knows nothing, including `zscale`.
pub struct EmptyRegistry;

impl VariationRegistry for EmptyRegistry {
    fn create(&self, _name: &str) -> Option<Box<dyn VariationFunc>> {
        None
    }
}
