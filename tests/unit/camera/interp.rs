use super::*;

fn kf(frame: i64, zoom: f64) -> Keyframe {
    Keyframe::at(frame).with(CameraField::Zoom, zoom)
}

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(f64::lerp(&1.0, &3.0, 0.0), 1.0);
    assert_eq!(f64::lerp(&1.0, &3.0, 1.0), 3.0);
    assert_eq!(f64::lerp(&1.0, &3.0, 0.5), 2.0);
}

#[test]
fn empty_set_has_no_bracket() {
    assert_eq!(Bracket::locate(&[], 5), Bracket::Empty);
}

#[test]
fn locate_picks_nearest_on_each_side_regardless_of_order() {
    let keys = vec![kf(30, 4.0), kf(0, 1.0), kf(20, 3.0), kf(10, 2.0)];
    match Bracket::locate(&keys, 15) {
        Bracket::Between { prev, next } => {
            assert_eq!(prev.frame, 10);
            assert_eq!(next.frame, 20);
        }
        other => panic!("unexpected bracket {other:?}"),
    }
}

#[test]
fn locate_clamps_outside_the_keyed_range() {
    let keys = vec![kf(10, 2.0), kf(20, 3.0)];
    assert_eq!(Bracket::locate(&keys, 0), Bracket::Clamped(&keys[0]));
    assert_eq!(Bracket::locate(&keys, 30), Bracket::Clamped(&keys[1]));
}

#[test]
fn locate_prefers_first_keyframe_on_duplicate_frames() {
    let keys = vec![kf(0, 1.0), kf(10, 5.0), kf(10, 9.0)];
    match Bracket::locate(&keys, 4) {
        Bracket::Between { next, .. } => assert_eq!(next.zoom, Some(5.0)),
        other => panic!("unexpected bracket {other:?}"),
    }
}

#[test]
fn alpha_follows_epsilon_formula() {
    let keys = vec![kf(0, 1.0), kf(10, 3.0)];
    let b = Bracket::locate(&keys, 5);
    let expected = 5.0 / (10.0 + ALPHA_EPSILON);
    assert_eq!(b.alpha(5), expected);
    assert!((b.alpha(5) - 0.5).abs() < 1e-6);
}

#[test]
fn apply_blends_fields_present_on_both_sides_only() {
    let keys = vec![
        Keyframe::at(0)
            .with(CameraField::Zoom, 1.0)
            .with(CameraField::TranslationX, 8.0),
        Keyframe::at(10)
            .with(CameraField::Zoom, 3.0)
            .with(CameraField::TranslationY, 8.0),
    ];
    let mut params = CameraParams::default();
    Bracket::locate(&keys, 5).apply(5, &mut params);

    assert!((params.zoom - 2.0).abs() < 1e-6);
    assert_eq!(params.translation_x, 0.0);
    assert_eq!(params.translation_y, 0.0);
}

#[test]
fn apply_clamped_copies_the_keyframe() {
    let keys = vec![Keyframe::at(10)
        .with(CameraField::Zoom, 1.25)
        .with(CameraField::Rotation3dX, -3.0)];
    let mut params = CameraParams::default();
    Bracket::locate(&keys, 0).apply(0, &mut params);
    assert_eq!(params.zoom, 1.25);
    assert_eq!(params.rotation_3d_x, -3.0);
    assert_eq!(params.translation_x, 0.0);
}
