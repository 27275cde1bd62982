// Host-side tests for the triggered-event payload.

#![allow(dead_code)]
mod notice {
    include!("../src/notice.rs");
}

use notice::{triggered_notice, TriggeredNotice};
use scrollseq_core::{
    FrameReport, MotionPolicy, SceneSequencer, SequencerConfig, TriggerState, Triggered,
};
use std::time::Duration;

fn report(triggered: Option<Triggered>, effect_started: bool) -> FrameReport {
    FrameReport {
        progress: 0.6,
        state: TriggerState::Active,
        triggered,
        effect_started,
    }
}

#[test]
fn quiet_frames_carry_no_notice() {
    assert_eq!(triggered_notice(&report(None, false)), None);
}

#[test]
fn notice_copies_progress_and_effect() {
    let t = Triggered {
        at_sec: 1.5,
        progress: 0.61,
    };
    assert_eq!(
        triggered_notice(&report(Some(t), true)),
        Some(TriggeredNotice {
            progress: 0.61,
            effect: true,
        })
    );
    assert_eq!(
        triggered_notice(&report(Some(t), false)).map(|n| n.effect),
        Some(false)
    );
}

#[test]
fn one_notice_per_crossing_from_a_live_sequencer() {
    let scenes = scrollseq_core::journey::journey_scenes().unwrap();
    let mut seq =
        SceneSequencer::new(SequencerConfig::default(), scenes, MotionPolicy::default()).unwrap();
    let mut notices = Vec::new();
    seq.observe(0.0);
    for i in 0..240 {
        if i == 10 {
            seq.observe(0.9);
        }
        if let Some(n) = triggered_notice(&seq.tick(Duration::from_millis(16))) {
            notices.push(n);
        }
    }
    assert_eq!(notices.len(), 1);
    assert!(notices[0].progress >= 0.55);
}
