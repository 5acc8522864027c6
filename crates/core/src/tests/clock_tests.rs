use super::*;

#[test]
fn test_to_frames_at_default_rate() {
    let clock = FrameClock::default();
    assert_eq!(clock.fps(), 30);
    assert_eq!(clock.to_frames(0), 0);
    assert_eq!(clock.to_frames(500), 15);
    assert_eq!(clock.to_frames(800), 24);
    assert_eq!(clock.to_frames(1_000), 30);
    assert_eq!(clock.to_frames(2_000), 60);
}

#[test]
fn test_to_frames_rounds_to_nearest() {
    let clock = FrameClock::default();
    // 16 ms = 0.48 frames, 17 ms = 0.51 frames
    assert_eq!(clock.to_frames(16), 0);
    assert_eq!(clock.to_frames(17), 1);
    // 49 ms = 1.47 frames, 50 ms = 1.5 frames (half rounds up)
    assert_eq!(clock.to_frames(49), 1);
    assert_eq!(clock.to_frames(50), 2);
}

#[test]
fn test_rate_is_configurable() {
    let clock = FrameClock::from_fps(24).expect("non-zero");
    assert_eq!(clock.to_frames(1_000), 24);
    assert_eq!(clock.to_frames(20), 0);
    assert_eq!(clock.to_frames(21), 1);

    let clock = FrameClock::from_fps(60).expect("non-zero");
    assert_eq!(clock.to_frames(1_000), 60);
}

#[test]
fn test_zero_rate_is_rejected() {
    assert!(FrameClock::from_fps(0).is_none());
}

#[test]
fn test_to_ms_inverts_whole_frames() {
    let clock = FrameClock::default();
    assert_eq!(clock.to_ms(30), 1_000);
    assert_eq!(clock.to_ms(45), 1_500);
    assert_eq!(clock.to_ms(1), 33);
}

#[test]
fn test_huge_durations_saturate() {
    let clock = FrameClock::default();
    assert_eq!(clock.to_frames(u64::MAX), u64::MAX / 1_000);
}
