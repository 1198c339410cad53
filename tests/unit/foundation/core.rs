use super::*;

#[test]
fn small_frames_convert_to_signed() {
    assert_eq!(FrameIndex(0).to_keyframe_frame().unwrap(), 0);
    assert_eq!(FrameIndex(42).to_keyframe_frame().unwrap(), 42);
    assert_eq!(
        FrameIndex(i64::MAX as u64).to_keyframe_frame().unwrap(),
        i64::MAX
    );
}

#[test]
fn frames_past_i64_are_rejected() {
    let err = FrameIndex(u64::MAX).to_keyframe_frame().unwrap_err();
    assert!(err.to_string().contains("evaluation error:"));
}

#[test]
fn frame_index_is_transparent_in_json() {
    let f: FrameIndex = serde_json::from_str("7").unwrap();
    assert_eq!(f, FrameIndex(7));
    assert_eq!(serde_json::to_string(&f).unwrap(), "7");
    assert_eq!(f.to_string(), "7");
}
