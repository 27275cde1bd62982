// Host-side tests for CSS declaration building.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use scrollseq_core::{interpolate, Property, Rgb, Scene, Track, Value};
use style::declarations;

fn frame_at(scene: Scene, p: f32) -> Vec<(&'static str, String)> {
    let name = scene.name.clone();
    let out = interpolate(p, &[scene]);
    declarations(out.scene(&name).unwrap())
}

fn lookup<'a>(decls: &'a [(&'static str, String)], prop: &str) -> Option<&'a str> {
    decls
        .iter()
        .find(|(p, _)| *p == prop)
        .map(|(_, v)| v.as_str())
}

#[test]
fn offsets_and_scale_fold_into_one_transform() {
    let scene = Scene::new("frame")
        .with(
            Property::OffsetY,
            Track::new(&[0.0, 1.0], &[Value::Px(100.0), Value::Px(0.0)]).unwrap(),
        )
        .with(Property::Scale, Track::numbers(&[0.0, 1.0], &[0.5, 1.0]).unwrap());
    let decls = frame_at(scene, 0.5);
    assert_eq!(
        lookup(&decls, "transform"),
        Some("translate3d(0px, 50px, 0) scale(0.75)")
    );
    assert_eq!(decls.iter().filter(|(p, _)| *p == "transform").count(), 1);
}

#[test]
fn bare_number_offsets_are_pixels() {
    let scene = Scene::new("a").with(
        Property::OffsetX,
        Track::numbers(&[0.0, 1.0], &[0.0, -20.0]).unwrap(),
    );
    let decls = frame_at(scene, 1.0);
    assert_eq!(lookup(&decls, "transform"), Some("translate3d(-20px, 0px, 0)"));
}

#[test]
fn transparent_scenes_are_hidden() {
    let scene = Scene::new("a").with(
        Property::Opacity,
        Track::numbers(&[0.0, 1.0], &[0.0, 1.0]).unwrap(),
    );
    let hidden = frame_at(scene.clone(), 0.0);
    assert_eq!(lookup(&hidden, "opacity"), Some("0"));
    assert_eq!(lookup(&hidden, "visibility"), Some("hidden"));
    let shown = frame_at(scene, 0.5);
    assert_eq!(lookup(&shown, "opacity"), Some("0.5"));
    assert_eq!(lookup(&shown, "visibility"), Some("visible"));
}

#[test]
fn fill_color_and_background_map_to_css_properties() {
    let c = |h| Value::Color(Rgb::from_hex(h).unwrap());
    let scene = Scene::new("rail")
        .with(
            Property::Fill,
            Track::new(&[0.0, 1.0], &[Value::Percent(0.0), Value::Percent(100.0)]).unwrap(),
        )
        .with(
            Property::Color,
            Track::new(&[0.0, 1.0], &[c("#000000"), c("#ffffff")]).unwrap(),
        )
        .with(
            Property::Background,
            Track::new(&[0.0, 1.0], &[c("#102030"), c("#102030")]).unwrap(),
        );
    let decls = frame_at(scene, 0.4);
    assert_eq!(lookup(&decls, "width"), Some("40%"));
    assert_eq!(lookup(&decls, "color"), Some("rgb(102, 102, 102)"));
    assert_eq!(lookup(&decls, "background-color"), Some("rgb(16, 32, 48)"));
    assert_eq!(lookup(&decls, "transform"), None);
}
