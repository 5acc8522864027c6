use chat_timeline::{compile, sample, Message, Reveal};

mod common;
use common::alex_sam;

#[test]
fn single_message_at_thirty_fps() {
    let script = alex_sam(vec![Message::new("Alex", "Hi")
        .with_typing_ms(1_000)
        .with_delay_after_ms(500)]);
    let timeline = compile(&script);

    let message = &timeline.messages()[0];
    assert_eq!(message.start_frame, 0);
    assert_eq!(message.typing_end_frame, 30);
    assert_eq!(message.end_frame, 45);
    assert_eq!(timeline.total_duration_frames(), 105);
}

#[test]
fn zero_message_script() {
    let timeline = compile(&alex_sam(vec![]));
    assert_eq!(timeline.total_duration_frames(), 60);
    for frame in [-10, 0, 30, 59, 60, 10_000] {
        assert!(sample(&timeline, frame).visible.is_empty());
    }
}

#[test]
fn forty_characters_type_for_two_seconds() {
    let timeline = compile(&alex_sam(vec![Message::new("Sam", "x".repeat(40))]));
    let message = &timeline.messages()[0];
    assert_eq!(message.typing_end_frame - message.start_frame, 60);
}

#[test]
fn self_party_reveals_half_at_midpoint() {
    let timeline = compile(&alex_sam(vec![
        Message::new("Alex", "0123456789").with_typing_ms(2_000)
    ]));
    let sampled = sample(&timeline, 30);
    let typing = sampled.typing.expect("Alex is typing");
    assert!(matches!(
        typing.reveal,
        Reveal::Partial { text: "01234", .. }
    ));
}

#[test]
fn conversation_walkthrough() {
    let script = alex_sam(vec![
        Message::new("Alex", "You up?").with_typing_ms(1_000),
        Message::new("Sam", "Yeah. What’s wrong?").with_typing_ms(1_500),
    ]);
    let timeline = compile(&script);

    // "You up?" is 7 chars: reading delay max(800, 350) = 800 ms = 24 frames.
    let frames: Vec<_> = timeline
        .messages()
        .iter()
        .map(|m| (m.start_frame, m.typing_end_frame, m.end_frame))
        .collect();
    assert_eq!(frames, vec![(0, 30, 45), (69, 114, 129)]);
    assert_eq!(timeline.total_duration_frames(), 189);

    assert_eq!(sample(&timeline, 10).composer_text(), "Yo");
    assert_eq!(sample(&timeline, 60).visible.len(), 1);
    assert!(sample(&timeline, 100).typing.is_some());
    assert_eq!(sample(&timeline, 114).visible.len(), 2);
}
