//! Scene presets for the case-study pages.

use crate::error::ConfigError;
use crate::scene::{Driver, Property, Scene};
use crate::track::{Easing, Track};
use crate::value::{Rgb, Value};

/// Stage names of the journey section, in scroll order.
pub const JOURNEY_STAGES: [&str; 4] = ["discover", "define", "design", "deliver"];

// Stage windows: fade in over [a, b], hold, fade out over [c, d]. Adjacent
// windows overlap by one fade band so neighbours cross-fade.
const STAGE_WINDOWS: [[f32; 4]; 4] = [
    [0.00, 0.05, 0.20, 0.28],
    [0.20, 0.28, 0.42, 0.50],
    [0.42, 0.50, 0.64, 0.72],
    [0.64, 0.72, 1.00, 1.00],
];

const STAGE_ACCENTS: [&str; 4] = ["#ff5e3a", "#ffc400", "#4a90ff", "#7ed9a0"];

/// The journey narrative: four cross-fading stages, a progress rail that
/// fills with scroll, and an accent color that drifts between stages.
pub fn journey_scenes() -> Result<Vec<Scene>, ConfigError> {
    let mut scenes = Vec::with_capacity(JOURNEY_STAGES.len() + 2);
    for (name, w) in JOURNEY_STAGES.iter().zip(STAGE_WINDOWS) {
        // the last stage holds through the end of the section
        let last = w[3] >= 1.0;
        let (fade_out, exit_px) = if last { (1.0, 0.0) } else { (0.0, -40.0) };
        let opacity = Track::numbers(&w, &[0.0, 1.0, 1.0, fade_out])?;
        let rise = Track::new(
            &w,
            &[Value::Px(40.0), Value::Px(0.0), Value::Px(0.0), Value::Px(exit_px)],
        )?
        .with_easing(Easing::EaseOut);
        scenes.push(
            Scene::new(*name)
                .driven_by(Driver::Accent)
                .with(Property::Opacity, opacity)
                .with(Property::OffsetY, rise),
        );
    }

    let fill = Track::new(&[0.0, 1.0], &[Value::Percent(0.0), Value::Percent(100.0)])?;
    scenes.push(Scene::new("rail").with(Property::Fill, fill));

    let accents = STAGE_ACCENTS
        .iter()
        .map(|h| Rgb::from_hex(h).map(Value::Color))
        .collect::<Result<Vec<_>, _>>()?;
    let accent_at = [0.12, 0.35, 0.57, 0.85];
    let accent = Track::new(&accent_at, &accents)?;
    scenes.push(Scene::new("accent").with(Property::Color, accent));
    Ok(scenes)
}

/// The scroll-driven browser mockup: the frame rises and fades in, its
/// page content scrolls inside the screen, and the toolbar tint shifts.
pub fn browser_frame_scenes() -> Result<Vec<Scene>, ConfigError> {
    let frame = Scene::new("frame")
        .with(Property::Opacity, Track::numbers(&[0.0, 0.2], &[0.0, 1.0])?)
        .with(
            Property::OffsetY,
            Track::new(&[0.0, 0.3], &[Value::Px(120.0), Value::Px(0.0)])?
                .with_easing(Easing::EaseOut),
        )
        .with(Property::Scale, Track::numbers(&[0.0, 0.3], &[0.92, 1.0])?);
    let screen = Scene::new("screen").driven_by(Driver::Accent).with(
        Property::OffsetY,
        Track::new(&[0.2, 0.8], &[Value::Px(0.0), Value::Px(-640.0)])?,
    );
    let toolbar = Scene::new("toolbar").with(
        Property::Background,
        Track::new(
            &[0.2, 0.8],
            &[
                Value::Color(Rgb::from_hex("#1e1e2e")?),
                Value::Color(Rgb::from_hex("#4a90ff")?),
            ],
        )?,
    );
    Ok(vec![frame, screen, toolbar])
}

/// Preset lookup by the name used in `data-scroll-sequence`.
pub fn preset(name: &str) -> Option<Result<Vec<Scene>, ConfigError>> {
    match name {
        "journey" => Some(journey_scenes()),
        "browser-frame" => Some(browser_frame_scenes()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::interpolate;

    #[test]
    fn presets_build() {
        assert_eq!(journey_scenes().unwrap().len(), 6);
        assert_eq!(browser_frame_scenes().unwrap().len(), 3);
        assert!(preset("journey").is_some());
        assert!(preset("nope").is_none());
    }

    #[test]
    fn one_stage_in_foreground_between_bands() {
        let scenes = journey_scenes().unwrap();
        let bands = [
            (0.1, "discover"),
            (0.35, "define"),
            (0.57, "design"),
            (0.9, "deliver"),
        ];
        for (p, expected) in bands {
            let out = interpolate(p, &scenes);
            let full: Vec<&str> = JOURNEY_STAGES
                .iter()
                .copied()
                .filter(|s| out.scene(s).unwrap().opacity() > 0.99)
                .collect();
            assert_eq!(full, vec![expected], "at p={p}");
        }
    }

    #[test]
    fn final_stage_stays_visible_at_end() {
        let out = interpolate(1.0, &journey_scenes().unwrap());
        assert_eq!(out.scene("deliver").unwrap().opacity(), 1.0);
        assert_eq!(out.get("rail", Property::Fill), Some(Value::Percent(100.0)));
    }
}
