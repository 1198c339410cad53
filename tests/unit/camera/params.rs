use super::*;

#[test]
fn defaults_are_neutral() {
    let p = CameraParams::default();
    for (field, value) in p.iter() {
        assert_eq!(value, field.neutral(), "{}", field.name());
    }
    assert_eq!(p.zoom, 1.0);
    assert_eq!(p.translation_z, 0.0);
}

#[test]
fn names_round_trip_through_lookup() {
    for field in CameraField::ALL {
        assert_eq!(CameraField::from_name(field.name()), Some(field));
    }
    assert_eq!(CameraField::from_name("strength"), None);
}

#[test]
fn set_targets_only_the_named_field() {
    let mut p = CameraParams::default();
    p.set(CameraField::Rotation3dY, 4.5);
    assert_eq!(p.rotation_3d_y, 4.5);
    assert_eq!(p.get(CameraField::Rotation3dY), 4.5);
    assert_eq!(p.rotation_3d_x, 0.0);
    assert_eq!(p.zoom, 1.0);
}

#[test]
fn serializes_with_wire_names_in_order() {
    let json = serde_json::to_string(&CameraParams::default()).unwrap();
    assert_eq!(
        json,
        r#"{"translation_x":0.0,"translation_y":0.0,"translation_z":0.0,"rotation_3d_x":0.0,"rotation_3d_y":0.0,"rotation_3d_z":0.0,"zoom":1.0}"#
    );
}
