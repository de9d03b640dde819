use std::collections::BTreeMap;
use std::fmt;

use crate::variation::VariationFunc;

/// Curve interpolation modes as the engine knows them.
///
/// This set is wider than the wire model's; wire decoding falls back
/// to spline for modes it does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineInterpolation {
    Linear,
    Bezier,
    #[default]
    Spline,
    Cosine,
}

/// The engine's keyframe curve container.
///
/// The engine attaches a curve container to every curve-capable
/// attribute and represents "no curve" as a disabled container, never
/// as absence. Keyed curve maps (xform coefficients, variation
/// params) are the one place a container can be genuinely absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCurve {
    pub enabled: bool,
    pub view_x_min: i32,
    pub view_x_max: i32,
    pub view_y_min: f64,
    pub view_y_max: f64,
    pub interpolation: EngineInterpolation,
    pub selected_idx: i32,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub locked: bool,
}

impl Default for MotionCurve {
    fn default() -> Self {
        MotionCurve {
            enabled: false,
            view_x_min: 0,
            view_x_max: 70,
            view_y_min: -120.0,
            view_y_max: 120.0,
            interpolation: EngineInterpolation::default(),
            selected_idx: 0,
            x: Vec::new(),
            y: Vec::new(),
            locked: false,
        }
    }
}

/// One palette entry, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A fixed-size, index-addressed color palette.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a black palette with `size` slots.
    pub fn new(size: usize) -> Self {
        Palette {
            colors: vec![Rgb::default(); size],
        }
    }

    pub fn size(&self) -> usize {
        self.colors.len()
    }

    /// Slot at `idx`, black when out of range.
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors.get(idx).copied().unwrap_or_default()
    }

    /// Replaces the slot at `idx`; out-of-range indices are ignored.
    pub fn set_color(&mut self, idx: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(idx) {
            *slot = color;
        }
    }
}

/// One variation attached to an engine xform: a function instance, an
/// amount, and the motion curves driving amount and parameters.
pub struct EngineVariation {
    pub amount: f64,
    pub amount_curve: MotionCurve,
    pub func: Box<dyn VariationFunc>,
    /// Parameter curves keyed by parameter name. Absence means the
    /// parameter has never been animated.
    pub param_curves: BTreeMap<String, MotionCurve>,
}

impl EngineVariation {
    pub fn new(func: Box<dyn VariationFunc>, amount: f64) -> Self {
        EngineVariation {
            amount,
            amount_curve: MotionCurve::default(),
            func,
            param_curves: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for EngineVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineVariation")
            .field("name", &self.func.name())
            .field("amount", &self.amount)
            .field("param_curves", &self.param_curves.keys())
            .finish()
    }
}

/// Identity 2x3 affine coefficients.
pub const IDENTITY_COEFFS: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// One engine transform node.
#[derive(Debug)]
pub struct EngineXForm {
    pub weight: f64,
    pub color: f64,
    pub color_symmetry: f64,
    /// Fixed-length weight vector, sized to the owning layer's xform
    /// count.
    pub modified_weights: Vec<f64>,
    pub xy_coeffs: [f64; 6],
    pub yz_coeffs: [f64; 6],
    pub zx_coeffs: [f64; 6],
    pub xy_post: [f64; 6],
    pub yz_post: [f64; 6],
    pub zx_post: [f64; 6],
    /// Motion curves keyed by property name (`xyC00` .. `zxPScale`).
    pub curves: BTreeMap<String, MotionCurve>,
    pub variations: Vec<EngineVariation>,
}

impl Default for EngineXForm {
    fn default() -> Self {
        EngineXForm {
            weight: 0.0,
            color: 0.0,
            color_symmetry: 0.0,
            modified_weights: Vec::new(),
            xy_coeffs: IDENTITY_COEFFS,
            yz_coeffs: IDENTITY_COEFFS,
            zx_coeffs: IDENTITY_COEFFS,
            xy_post: IDENTITY_COEFFS,
            yz_post: IDENTITY_COEFFS,
            zx_post: IDENTITY_COEFFS,
            curves: BTreeMap::new(),
            variations: Vec::new(),
        }
    }
}

/// One engine layer.
#[derive(Debug)]
pub struct EngineLayer {
    pub weight: f64,
    pub density: f64,
    pub palette: Palette,
    pub xforms: Vec<EngineXForm>,
    pub final_xforms: Vec<EngineXForm>,
}

impl Default for EngineLayer {
    fn default() -> Self {
        EngineLayer {
            weight: 1.0,
            density: 1.0,
            palette: Palette::default(),
            xforms: Vec::new(),
            final_xforms: Vec::new(),
        }
    }
}

/// The engine-side scene root.
#[derive(Debug)]
pub struct EngineFlame {
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

    pub cam_zoom: f64,
    pub cam_zoom_curve: MotionCurve,
    pub centre_x: f64,
    pub centre_x_curve: MotionCurve,
    pub centre_y: f64,
    pub centre_y_curve: MotionCurve,
    pub cam_yaw: f64,
    pub cam_yaw_curve: MotionCurve,
    pub cam_pitch: f64,
    pub cam_pitch_curve: MotionCurve,
    pub cam_roll: f64,
    pub cam_roll_curve: MotionCurve,
    pub cam_bank: f64,
    pub cam_bank_curve: MotionCurve,

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

    /// Retired per-scene mode; scenes still carrying it are rewritten
    /// once at read time and the flag cleared.
    pub preserve_z: bool,

    pub layers: Vec<EngineLayer>,
}

impl Default for EngineFlame {
    fn default() -> Self {
        EngineFlame {
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
            cam_zoom: 1.0,
            cam_zoom_curve: MotionCurve::default(),
            centre_x: 0.0,
            centre_x_curve: MotionCurve::default(),
            centre_y: 0.0,
            centre_y_curve: MotionCurve::default(),
            cam_yaw: 0.0,
            cam_yaw_curve: MotionCurve::default(),
            cam_pitch: 0.0,
            cam_pitch_curve: MotionCurve::default(),
            cam_roll: 0.0,
            cam_roll_curve: MotionCurve::default(),
            cam_bank: 0.0,
            cam_bank_curve: MotionCurve::default(),
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
            preserve_z: false,
            layers: Vec::new(),
        }
    }
}
