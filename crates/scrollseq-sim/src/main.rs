use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use scrollseq_core::{journey, MotionPolicy, SceneSequencer, SequencerConfig, TriggerState};

const FRAME: Duration = Duration::from_micros(16_667);
const LOG_EVERY_FRAMES: usize = 30; // half a second at 60 fps

/// A scripted scroll: each step eases the raw progress to `to` over `secs`.
#[derive(Clone, Copy, Debug)]
struct Leg {
    to: f32,
    secs: f32,
}

fn script(name: &str) -> Option<Vec<Leg>> {
    let leg = |to, secs| Leg { to, secs };
    let legs = match name {
        // read the page top to bottom, then return to the top
        "read" => vec![leg(1.0, 8.0), leg(1.0, 1.0), leg(0.0, 4.0)],
        // jitter around the rising threshold without crossing back below falling
        "jitter" => vec![
            leg(0.5, 2.0),
            leg(0.6, 0.5),
            leg(0.5, 0.5),
            leg(0.6, 0.5),
            leg(0.5, 3.0),
            leg(0.4, 1.0),
            leg(0.6, 1.0),
            leg(0.6, 3.0),
        ],
        // anchor jumps: instant moves the spring has to absorb
        "jump" => vec![leg(0.9, 0.0), leg(0.9, 3.0), leg(0.0, 0.0), leg(0.0, 3.0)],
        _ => return None,
    };
    Some(legs)
}

struct Args {
    preset: String,
    script: String,
    reduced_motion: bool,
    width: f64,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        preset: "journey".to_string(),
        script: "read".to_string(),
        reduced_motion: false,
        width: 1280.0,
    };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--preset" => args.preset = it.next().ok_or_else(|| anyhow!("--preset needs a value"))?,
            "--script" => args.script = it.next().ok_or_else(|| anyhow!("--script needs a value"))?,
            "--reduced-motion" => args.reduced_motion = true,
            "--width" => {
                let v = it.next().ok_or_else(|| anyhow!("--width needs a value"))?;
                args.width = v.parse().with_context(|| format!("bad --width {v:?}"))?;
            }
            other => bail!(
                "unknown argument {other:?} (usage: scrollseq-sim [--preset journey|browser-frame] \
                 [--script read|jitter|jump] [--reduced-motion] [--width PX])"
            ),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args()?;
    let scenes = journey::preset(&args.preset)
        .ok_or_else(|| anyhow!("unknown preset {:?}", args.preset))??;
    let legs = script(&args.script).ok_or_else(|| anyhow!("unknown script {:?}", args.script))?;
    let policy = MotionPolicy::resolve(args.reduced_motion, args.width);
    let mut seq = SceneSequencer::new(SequencerConfig::default(), scenes, policy)?;

    let mut raw = 0.0_f32;
    let mut frame = 0usize;
    let mut last_state = TriggerState::Idle;
    let mut bursts = 0usize;
    seq.observe(raw);
    for leg in legs {
        let frames = ((leg.secs / FRAME.as_secs_f32()).round() as usize).max(1);
        let from = raw;
        for i in 1..=frames {
            raw = from + (leg.to - from) * (i as f32 / frames as f32);
            seq.observe(raw);
            let report = seq.tick(FRAME);
            frame += 1;

            if let Some(t) = report.triggered {
                log::info!(
                    "[sim] frame {frame}: triggered at p={:.3} t={:.2}s effect={}",
                    t.progress,
                    t.at_sec,
                    report.effect_started
                );
                if report.effect_started {
                    bursts += 1;
                }
            }
            if report.state != last_state {
                log::info!(
                    "[sim] frame {frame}: {} -> {}",
                    last_state.as_str(),
                    report.state.as_str()
                );
                last_state = report.state;
            }
            if frame % LOG_EVERY_FRAMES == 0 {
                log_frame(&seq, frame, raw);
            }
        }
    }

    // let springs settle and any running burst finish
    let mut settle = 0;
    while seq.needs_frame() && settle < 600 {
        seq.tick(FRAME);
        settle += 1;
    }
    log_frame(&seq, frame + settle, raw);
    seq.teardown();
    log::info!(
        "[sim] done: {} frames, {} bursts, final state {}",
        frame + settle,
        bursts,
        seq.trigger_state().as_str()
    );
    Ok(())
}

fn log_frame(seq: &SceneSequencer, frame: usize, raw: f32) {
    let out = seq.outputs();
    let mut names: Vec<&str> = out.iter().map(|(n, _)| n).collect();
    names.sort_unstable();
    let summary = names
        .iter()
        .filter_map(|n| out.scene(n).map(|f| (n, f)))
        .map(|(n, f)| {
            let values = f
                .iter()
                .map(|(p, v)| format!("{}={}", p.name(), v))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{n}[{values}]")
        })
        .collect::<Vec<_>>()
        .join(" ");
    log::info!(
        "[sim] frame {frame}: raw={raw:.3} smooth={:.3} {}",
        seq.progress(),
        summary
    );
}
