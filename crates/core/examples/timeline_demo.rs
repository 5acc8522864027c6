//! Example: compiling a chat script and scrubbing through it.

use chat_timeline::{compile, FrameTrace, ScriptRaw};

fn main() {
    println!("=== Chat Timeline Example ===\n");

    let script = ScriptRaw::demo().validate().expect("demo script is valid");
    let timeline = compile(&script);

    println!(
        "{} messages, {} frames at {} fps ({} ms)\n",
        timeline.len(),
        timeline.total_duration_frames(),
        timeline.fps(),
        timeline.duration_ms()
    );

    for message in timeline.messages().iter().take(4) {
        println!(
            "{:>5} {:>5} {:>5}  {}: {}",
            message.start_frame,
            message.typing_end_frame,
            message.end_frame,
            message.message.from,
            message.message.text
        );
    }

    println!("\nScrubbing:");
    for frame in [0, 10, 20, 40, 80, 120] {
        let sample = timeline.sample(frame);
        println!(
            "  frame {frame:>4}: visible={} composer={:?} status={:?}",
            sample.visible.len(),
            sample.composer_text(),
            sample.peer_status()
        );
    }

    let trace = FrameTrace::transitions(&timeline);
    println!("\n{} view changes across the whole timeline", trace.len());
}
