use cube_field::camera::{OrbitCamera, DEFAULT_CAMERA_SPEED};

#[test]
fn test_set_aspect_updates_ratio() {
    let mut cam = OrbitCamera::default();
    cam.set_aspect(1600, 900);
    assert_eq!(cam.aspect, 1600.0 / 900.0);
}

#[test]
fn test_zero_height_resize_does_not_divide_by_zero() {
    let mut cam = OrbitCamera::default();
    cam.set_aspect(800, 0);
    assert!(cam.aspect.is_finite());
    assert_eq!(cam.aspect, 800.0, "height clamps to 1");
}

#[test]
fn test_speed_percent_mapping_is_exact() {
    let mut cam = OrbitCamera::default();
    for value in 1..=100u32 {
        cam.set_speed_percent(value);
        assert_eq!(
            cam.speed,
            value as f32 / 100.0,
            "slider value {} must map to exactly {}",
            value,
            value as f32 / 100.0
        );
    }
}

#[test]
fn test_slider_initial_value_derives_from_default_speed() {
    let cam = OrbitCamera::default();
    assert_eq!(cam.speed_percent(), (DEFAULT_CAMERA_SPEED * 100.0).round() as u32);
}

#[test]
fn test_orbit_advances_the_view() {
    let mut cam = OrbitCamera::default();
    let before = cam.view_matrix();
    for _ in 0..30 {
        cam.advance();
    }
    assert_ne!(before, cam.view_matrix(), "orbiting camera must move");
    assert_eq!(cam.angle, 30.0 * cam.speed);
}

#[test]
fn test_static_camera_holds_its_view() {
    let mut cam = OrbitCamera {
        orbiting: false,
        ..OrbitCamera::default()
    };
    let before = cam.view_matrix();
    for _ in 0..30 {
        cam.advance();
    }
    assert_eq!(before, cam.view_matrix());
}

#[test]
fn test_matrices_are_finite_across_aspect_changes() {
    let mut cam = OrbitCamera::default();
    for (w, h) in [(800u32, 600u32), (1, 1), (3840, 2160), (500, 0)] {
        cam.set_aspect(w, h);
        let vp = cam.view_projection();
        assert!(
            vp.to_cols_array().iter().all(|v| v.is_finite()),
            "view-projection for {}x{} contains non-finite values",
            w,
            h
        );
    }
}

#[test]
fn test_camera_orbits_at_fixed_distance() {
    let mut cam = OrbitCamera::default();
    for _ in 0..100 {
        cam.advance();
        // The view transform keeps the origin at a constant distance ahead
        // of the camera.
        let origin_in_view = cam.view_matrix().transform_point3(glam::Vec3::ZERO);
        assert!((origin_in_view.length() - cam.distance).abs() < 1e-3);
    }
}
