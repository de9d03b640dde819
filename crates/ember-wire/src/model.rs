use serde::{Deserialize, Serialize};

use crate::param::FlameParam;

/// Maximum number of slots in a layer gradient.
pub const GRADIENT_SIZE: usize = 256;

/// One slot of a layer gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// A named parameter of a variation function.
///
/// Whether the value is int- or float-typed is fixed per parameter
/// name by the engine's variation registry and must survive a mapping
/// round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationParam {
    pub name: String,
    pub value: FlameParam,
}

/// One variation function attached to an xform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    pub amount: FlameParam,
    #[serde(default)]
    pub params: Vec<VariationParam>,
}

impl Variation {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Variation {
            name: name.into(),
            amount: FlameParam::float_scalar(amount),
            params: Vec::new(),
        }
    }
}

/// One 2x3 affine coefficient group, plus the rotate/scale
/// decomposition params that may drive it over time.
///
/// The engine stores rotate/scale only as curves, never as scalars, so
/// their scalar bases here are purely the wire-side defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineGroup {
    pub c00: FlameParam,
    pub c01: FlameParam,
    pub c10: FlameParam,
    pub c11: FlameParam,
    pub c20: FlameParam,
    pub c21: FlameParam,
    pub rotate: FlameParam,
    pub scale: FlameParam,
}

impl Default for AffineGroup {
    fn default() -> Self {
        AffineGroup {
            c00: FlameParam::float_scalar(1.0),
            c01: FlameParam::float_scalar(0.0),
            c10: FlameParam::float_scalar(0.0),
            c11: FlameParam::float_scalar(1.0),
            c20: FlameParam::float_scalar(0.0),
            c21: FlameParam::float_scalar(0.0),
            rotate: FlameParam::float_scalar(0.0),
            scale: FlameParam::float_scalar(1.0),
        }
    }
}

/// One affine-plus-variations transform node within a layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XForm {
    pub weight: f64,
    pub color: f64,
    pub color_symmetry: f64,
    /// Per-sibling weight modifiers, aligned positionally with the
    /// owning layer's xform list. May be shorter than the sibling
    /// count; missing entries are implicitly zero.
    #[serde(default)]
    pub modified_weights: Vec<f64>,
    pub xy: AffineGroup,
    pub yz: AffineGroup,
    pub zx: AffineGroup,
    pub xy_post: AffineGroup,
    pub yz_post: AffineGroup,
    pub zx_post: AffineGroup,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

/// One layer of a flame: a gradient plus regular and final xforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub weight: f64,
    pub density: f64,
    #[serde(default)]
    pub gradient: Vec<Color>,
    #[serde(default)]
    pub xforms: Vec<XForm>,
    #[serde(default)]
    pub final_xforms: Vec<XForm>,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            weight: 1.0,
            density: 1.0,
            gradient: Vec::new(),
            xforms: Vec::new(),
            final_xforms: Vec::new(),
        }
    }
}

/// The whole scene: global render/camera attributes plus an ordered
/// sequence of layers. Layer order is render order and is preserved
/// through a mapping round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flame {
    pub brightness: f64,
    pub contrast: f64,
    pub sample_density: f64,
    pub low_density_brightness: f64,
    pub foreground_opacity: f64,
    pub vibrancy: f64,
    pub saturation: f64,
    pub gamma: f64,
    pub gamma_threshold: f64,
    pub balance_red: f64,
    pub balance_green: f64,
    pub balance_blue: f64,
    pub white_level: f64,
    pub pixels_per_unit: f64,
    pub width: i32,
    pub height: i32,

    // Camera attributes the engine models as motion curves.
    pub cam_zoom: FlameParam,
    pub centre_x: FlameParam,
    pub centre_y: FlameParam,
    pub cam_yaw: FlameParam,
    pub cam_pitch: FlameParam,
    pub cam_roll: FlameParam,
    pub cam_bank: FlameParam,

    pub cam_dof: f64,
    pub cam_dof_area: f64,
    pub cam_perspective: f64,
    pub diminish_z: f64,
    pub cam_pos_x: f64,
    pub cam_pos_y: f64,
    pub cam_pos_z: f64,
    pub new_cam_dof: bool,
    pub bg_transparency: bool,
    pub dim_z_distance: f64,
    pub cam_z: f64,
    pub focus_x: f64,
    pub focus_y: f64,
    pub focus_z: f64,
    pub cam_dof_exponent: f64,

    pub motion_blur_length: i32,
    pub motion_blur_time_step: f64,
    pub motion_blur_decay: f64,
    pub frame: i32,
    pub frame_count: i32,
    pub fps: i32,

    pub resolution_profile: String,
    pub quality_profile: String,
    pub name: String,
    pub bg_image_filename: String,
    pub last_filename: String,

    pub layers: Vec<Layer>,
}

impl Default for Flame {
    fn default() -> Self {
        Flame {
            brightness: 1.0,
            contrast: 1.0,
            sample_density: 100.0,
            low_density_brightness: 0.2,
            foreground_opacity: 0.0,
            vibrancy: 1.0,
            saturation: 1.0,
            gamma: 3.0,
            gamma_threshold: 0.05,
            balance_red: 0.0,
            balance_green: 0.0,
            balance_blue: 0.0,
            white_level: 200.0,
            pixels_per_unit: 100.0,
            width: 512,
            height: 512,
            cam_zoom: FlameParam::float_scalar(1.0),
            centre_x: FlameParam::float_scalar(0.0),
            centre_y: FlameParam::float_scalar(0.0),
            cam_yaw: FlameParam::float_scalar(0.0),
            cam_pitch: FlameParam::float_scalar(0.0),
            cam_roll: FlameParam::float_scalar(0.0),
            cam_bank: FlameParam::float_scalar(0.0),
            cam_dof: 0.0,
            cam_dof_area: 0.0,
            cam_perspective: 0.0,
            diminish_z: 0.0,
            cam_pos_x: 0.0,
            cam_pos_y: 0.0,
            cam_pos_z: 0.0,
            new_cam_dof: false,
            bg_transparency: true,
            dim_z_distance: 0.0,
            cam_z: 0.0,
            focus_x: 0.0,
            focus_y: 0.0,
            focus_z: 0.0,
            cam_dof_exponent: 0.0,
            motion_blur_length: 0,
            motion_blur_time_step: 0.05,
            motion_blur_decay: 0.03,
            frame: 1,
            frame_count: 100,
            fps: 25,
            resolution_profile: String::new(),
            quality_profile: String::new(),
            name: String::new(),
            bg_image_filename: String::new(),
            last_filename: String::new(),
            layers: Vec::new(),
        }
    }
}
