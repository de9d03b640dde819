use ember_engine::{EngineFlame, VariationRegistry};
use ember_wire::Flame;

use crate::{layer, param, MapError};

/// Decodes a whole engine scene into its wire form.
///
/// Callers expose parsed scenes through
/// [`crate::legacy::migrate_preserve_z`] before this, so the wire
/// model never carries the retired preserve-Z mode. Layer order is
/// preserved; every list is freshly built.
pub fn wire_from_engine(src: &EngineFlame) -> Flame {
    Flame {
        brightness: src.brightness,
        contrast: src.contrast,
        sample_density: src.sample_density,
        low_density_brightness: src.low_density_brightness,
        foreground_opacity: src.foreground_opacity,
        vibrancy: src.vibrancy,
        saturation: src.saturation,
        gamma: src.gamma,
        gamma_threshold: src.gamma_threshold,
        balance_red: src.balance_red,
        balance_green: src.balance_green,
        balance_blue: src.balance_blue,
        white_level: src.white_level,
        pixels_per_unit: src.pixels_per_unit,
        width: src.width,
        height: src.height,
        cam_zoom: param::float_from_engine(src.cam_zoom, Some(&src.cam_zoom_curve)),
        centre_x: param::float_from_engine(src.centre_x, Some(&src.centre_x_curve)),
        centre_y: param::float_from_engine(src.centre_y, Some(&src.centre_y_curve)),
        cam_yaw: param::float_from_engine(src.cam_yaw, Some(&src.cam_yaw_curve)),
        cam_pitch: param::float_from_engine(src.cam_pitch, Some(&src.cam_pitch_curve)),
        cam_roll: param::float_from_engine(src.cam_roll, Some(&src.cam_roll_curve)),
        cam_bank: param::float_from_engine(src.cam_bank, Some(&src.cam_bank_curve)),
        cam_dof: src.cam_dof,
        cam_dof_area: src.cam_dof_area,
        cam_perspective: src.cam_perspective,
        diminish_z: src.diminish_z,
        cam_pos_x: src.cam_pos_x,
        cam_pos_y: src.cam_pos_y,
        cam_pos_z: src.cam_pos_z,
        new_cam_dof: src.new_cam_dof,
        bg_transparency: src.bg_transparency,
        dim_z_distance: src.dim_z_distance,
        cam_z: src.cam_z,
        focus_x: src.focus_x,
        focus_y: src.focus_y,
        focus_z: src.focus_z,
        cam_dof_exponent: src.cam_dof_exponent,
        motion_blur_length: src.motion_blur_length,
        motion_blur_time_step: src.motion_blur_time_step,
        motion_blur_decay: src.motion_blur_decay,
        frame: src.frame,
        frame_count: src.frame_count,
        fps: src.fps,
        resolution_profile: src.resolution_profile.clone(),
        quality_profile: src.quality_profile.clone(),
        name: src.name.clone(),
        bg_image_filename: src.bg_image_filename.clone(),
        last_filename: src.last_filename.clone(),
        layers: src.layers.iter().map(layer::layer_from_engine).collect(),
    }
}

/// Encodes a wire scene into a fresh engine scene.
pub fn engine_from_wire(src: &Flame, registry: &dyn VariationRegistry) -> Result<EngineFlame, MapError> {
    let mut res = EngineFlame {
        brightness: src.brightness,
        contrast: src.contrast,
        sample_density: src.sample_density,
        low_density_brightness: src.low_density_brightness,
        foreground_opacity: src.foreground_opacity,
        vibrancy: src.vibrancy,
        saturation: src.saturation,
        gamma: src.gamma,
        gamma_threshold: src.gamma_threshold,
        balance_red: src.balance_red,
        balance_green: src.balance_green,
        balance_blue: src.balance_blue,
        white_level: src.white_level,
        pixels_per_unit: src.pixels_per_unit,
        width: src.width,
        height: src.height,
        cam_dof: src.cam_dof,
        cam_dof_area: src.cam_dof_area,
        cam_perspective: src.cam_perspective,
        diminish_z: src.diminish_z,
        cam_pos_x: src.cam_pos_x,
        cam_pos_y: src.cam_pos_y,
        cam_pos_z: src.cam_pos_z,
        new_cam_dof: src.new_cam_dof,
        bg_transparency: src.bg_transparency,
        dim_z_distance: src.dim_z_distance,
        cam_z: src.cam_z,
        focus_x: src.focus_x,
        focus_y: src.focus_y,
        focus_z: src.focus_z,
        cam_dof_exponent: src.cam_dof_exponent,
        motion_blur_length: src.motion_blur_length,
        motion_blur_time_step: src.motion_blur_time_step,
        motion_blur_decay: src.motion_blur_decay,
        frame: src.frame,
        frame_count: src.frame_count,
        fps: src.fps,
        resolution_profile: src.resolution_profile.clone(),
        quality_profile: src.quality_profile.clone(),
        name: src.name.clone(),
        bg_image_filename: src.bg_image_filename.clone(),
        last_filename: src.last_filename.clone(),
        preserve_z: false,
        ..EngineFlame::default()
    };

    let cam_zoom = param::float_to_engine(&src.cam_zoom)?;
    res.cam_zoom = cam_zoom.value;
    cam_zoom.curve.apply_to(&mut res.cam_zoom_curve);

    let centre_x = param::float_to_engine(&src.centre_x)?;
    res.centre_x = centre_x.value;
    centre_x.curve.apply_to(&mut res.centre_x_curve);

    let centre_y = param::float_to_engine(&src.centre_y)?;
    res.centre_y = centre_y.value;
    centre_y.curve.apply_to(&mut res.centre_y_curve);

    let cam_yaw = param::float_to_engine(&src.cam_yaw)?;
    res.cam_yaw = cam_yaw.value;
    cam_yaw.curve.apply_to(&mut res.cam_yaw_curve);

    let cam_pitch = param::float_to_engine(&src.cam_pitch)?;
    res.cam_pitch = cam_pitch.value;
    cam_pitch.curve.apply_to(&mut res.cam_pitch_curve);

    let cam_roll = param::float_to_engine(&src.cam_roll)?;
    res.cam_roll = cam_roll.value;
    cam_roll.curve.apply_to(&mut res.cam_roll_curve);

    let cam_bank = param::float_to_engine(&src.cam_bank)?;
    res.cam_bank = cam_bank.value;
    cam_bank.curve.apply_to(&mut res.cam_bank_curve);

    for l in &src.layers {
        res.layers.push(layer::layer_to_engine(l, registry)?);
    }
    Ok(res)
}
