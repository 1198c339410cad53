use super::*;

#[test]
fn missing_keyframes_key_is_empty_set() {
    let set = KeyframeSet::from_json("{}").unwrap();
    assert!(set.is_empty());

    let set = KeyframeSet::from_json(r#"{"options": {"bpm": 120}}"#).unwrap();
    assert_eq!(set.len(), 0);
}

#[test]
fn parses_known_fields_and_ignores_others() {
    let set = KeyframeSet::from_json(
        r#"{
          "keyframes": [
            {"frame": 0, "zoom": 1, "translation_x": "2.5", "prompt": "a forest", "zoom_i": "L"},
            {"frame": 12, "rotation_3d_z": -4.0}
          ]
        }"#,
    )
    .unwrap();

    assert_eq!(set.len(), 2);
    let first = &set.keyframes[0];
    assert_eq!(first.frame, 0);
    assert_eq!(first.get(CameraField::Zoom), Some(1.0));
    assert_eq!(first.get(CameraField::TranslationX), Some(2.5));
    assert_eq!(first.get(CameraField::TranslationY), None);

    let second = &set.keyframes[1];
    assert_eq!(second.frame, 12);
    assert_eq!(second.rotation_3d_z, Some(-4.0));
    assert_eq!(second.zoom, None);
}

#[test]
fn keeps_payload_order() {
    let set =
        KeyframeSet::from_json(r#"{"keyframes": [{"frame": 20}, {"frame": 5}, {"frame": 10}]}"#)
            .unwrap();
    let frames: Vec<i64> = set.keyframes.iter().map(|k| k.frame).collect();
    assert_eq!(frames, vec![20, 5, 10]);
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = KeyframeSet::from_json("{not json").unwrap_err();
    assert!(matches!(err, DeforumError::Serde(_)));
}

#[test]
fn non_object_payload_is_rejected() {
    let err = KeyframeSet::from_json("[]").unwrap_err();
    assert!(matches!(err, DeforumError::Validation(_)));
    assert!(err.to_string().contains("an array"));

    assert!(KeyframeSet::from_json("3").is_err());
    assert!(KeyframeSet::from_json("null").is_err());
}

#[test]
fn structural_errors_are_rejected() {
    // missing frame
    assert!(KeyframeSet::from_json(r#"{"keyframes": [{"zoom": 1.0}]}"#).is_err());
    // fractional frame
    assert!(KeyframeSet::from_json(r#"{"keyframes": [{"frame": 1.5}]}"#).is_err());
    // keyframes not a list
    assert!(KeyframeSet::from_json(r#"{"keyframes": null}"#).is_err());
    assert!(KeyframeSet::from_json(r#"{"keyframes": {"frame": 0}}"#).is_err());
    // keyframe not an object
    assert!(KeyframeSet::from_json(r#"{"keyframes": [3]}"#).is_err());
    // non-numeric parameter
    assert!(KeyframeSet::from_json(r#"{"keyframes": [{"frame": 0, "zoom": "big"}]}"#).is_err());
}

#[test]
fn builder_sets_fields() {
    let kf = Keyframe::at(3)
        .with(CameraField::Zoom, 2.0)
        .with(CameraField::TranslationY, -1.0);
    assert_eq!(kf.frame, 3);
    assert_eq!(kf.zoom, Some(2.0));
    assert_eq!(kf.translation_y, Some(-1.0));
    assert_eq!(kf.translation_x, None);
}
