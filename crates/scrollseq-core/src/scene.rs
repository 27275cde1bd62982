//! Named scenes and the per-frame output table.

use crate::error::ConfigError;
use crate::track::Track;
use crate::value::Value;
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Visual property a track drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    OffsetX,
    OffsetY,
    Scale,
    Color,
    Background,
    Fill,
    Height,
}

impl Property {
    pub fn name(self) -> &'static str {
        match self {
            Property::Opacity => "opacity",
            Property::OffsetX => "offset-x",
            Property::OffsetY => "offset-y",
            Property::Scale => "scale",
            Property::Color => "color",
            Property::Background => "background",
            Property::Fill => "fill",
            Property::Height => "height",
        }
    }
}

/// Which smoothed signal a scene reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Driver {
    /// The main smoothed scroll progress.
    #[default]
    Progress,
    /// A stiffer spring on the same raw progress, for offsets and accents
    /// that should track the scroll more tightly.
    Accent,
}

/// Smoothed signals available to scenes in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Signals {
    pub progress: f32,
    pub accent: f32,
}

impl Signals {
    pub fn uniform(progress: f32) -> Self {
        Self {
            progress,
            accent: progress,
        }
    }

    pub fn for_driver(&self, driver: Driver) -> f32 {
        match driver {
            Driver::Progress => self.progress,
            Driver::Accent => self.accent,
        }
    }
}

/// A named visual state bound to a range of progress.
///
/// Scenes are independent: overlapping ranges cross-fade through each
/// scene's own opacity track, nothing enforces a single foreground scene.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub driver: Driver,
    tracks: SmallVec<[(Property, Track); 4]>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: Driver::Progress,
            tracks: SmallVec::new(),
        }
    }

    pub fn driven_by(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    /// Add or replace the track for `property`.
    pub fn with(mut self, property: Property, track: Track) -> Self {
        match self.tracks.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = track,
            None => self.tracks.push((property, track)),
        }
        self
    }

    pub fn tracks(&self) -> impl Iterator<Item = (Property, &Track)> {
        self.tracks.iter().map(|(p, t)| (*p, t))
    }

    pub fn track(&self, property: Property) -> Option<&Track> {
        self.tracks
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, t)| t)
    }

    fn sample_into(&self, progress: f32, stepped: bool, frame: &mut SceneFrame) {
        for (property, track) in &self.tracks {
            let v = if stepped {
                track.sample_stepped(progress)
            } else {
                track.sample(progress)
            };
            frame.values.insert(*property, v);
        }
    }
}

/// Current values of one scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    values: FnvHashMap<Property, Value>,
}

impl SceneFrame {
    pub fn get(&self, property: Property) -> Option<Value> {
        self.values.get(&property).copied()
    }

    /// Opacity, defaulting to fully visible when the scene has no opacity track.
    pub fn opacity(&self) -> f32 {
        self.get(Property::Opacity)
            .and_then(|v| v.as_f32())
            .unwrap_or(1.0)
    }

    /// Values in a stable property order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, Value)> {
        let mut pairs: SmallVec<[(Property, Value); 8]> =
            self.values.iter().map(|(p, v)| (*p, *v)).collect();
        pairs.sort_by_key(|(p, _)| *p);
        pairs.into_iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Property values for every declared scene at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneOutputs {
    frames: FnvHashMap<String, SceneFrame>,
}

impl SceneOutputs {
    pub fn scene(&self, name: &str) -> Option<&SceneFrame> {
        self.frames.get(name)
    }

    pub fn get(&self, scene: &str, property: Property) -> Option<Value> {
        self.frames.get(scene).and_then(|f| f.get(property))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneFrame)> {
        self.frames.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Reject duplicate scene names; the output table is keyed by name.
pub fn validate_scenes(scenes: &[Scene]) -> Result<(), ConfigError> {
    let mut seen = FnvHashSet::default();
    for s in scenes {
        if !seen.insert(s.name.as_str()) {
            return Err(ConfigError::DuplicateScene(s.name.clone()));
        }
    }
    Ok(())
}

/// Sample every scene at `progress`, ignoring scene drivers.
pub fn interpolate(progress: f32, scenes: &[Scene]) -> SceneOutputs {
    let mut out = SceneOutputs::default();
    interpolate_into(Signals::uniform(progress), scenes, false, &mut out);
    out
}

/// Sample every scene from its driver signal, reusing `out`'s allocations.
/// `stepped` selects breakpoint snapping instead of continuous blending.
pub fn interpolate_into(
    signals: Signals,
    scenes: &[Scene],
    stepped: bool,
    out: &mut SceneOutputs,
) {
    for scene in scenes {
        let progress = signals.for_driver(scene.driver);
        match out.frames.get_mut(&scene.name) {
            Some(frame) => scene.sample_into(progress, stepped, frame),
            None => {
                let mut frame = SceneFrame::default();
                scene.sample_into(progress, stepped, &mut frame);
                out.frames.insert(scene.name.clone(), frame);
            }
        }
    }
}
