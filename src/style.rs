use crate::constants::HIDDEN_OPACITY;
use scrollseq_core::{Property, SceneFrame, Value};

/// CSS length for an offset; bare numbers are taken as pixels.
fn length(v: Value) -> String {
    match v {
        Value::Number(n) => Value::Px(n).to_string(),
        other => other.to_string(),
    }
}

/// Inline style declarations for one scene frame.
///
/// Offsets and scale share a single `transform`; everything else maps to
/// one property each. Order is stable so repeated frames write the same
/// sequence of properties.
pub fn declarations(frame: &SceneFrame) -> Vec<(&'static str, String)> {
    let mut out = Vec::with_capacity(frame.len() + 2);
    let mut tx = None;
    let mut ty = None;
    let mut scale = None;
    for (property, value) in frame.iter() {
        match property {
            Property::Opacity => {
                let o = value.as_f32().unwrap_or(1.0);
                out.push(("opacity", value.to_string()));
                let vis = if o <= HIDDEN_OPACITY { "hidden" } else { "visible" };
                out.push(("visibility", vis.to_string()));
            }
            Property::OffsetX => tx = Some(length(value)),
            Property::OffsetY => ty = Some(length(value)),
            Property::Scale => scale = value.as_f32(),
            Property::Color => out.push(("color", value.to_string())),
            Property::Background => out.push(("background-color", value.to_string())),
            Property::Fill => out.push(("width", value.to_string())),
            Property::Height => out.push(("height", length(value))),
        }
    }
    if tx.is_some() || ty.is_some() || scale.is_some() {
        let mut t = format!(
            "translate3d({}, {}, 0)",
            tx.as_deref().unwrap_or("0px"),
            ty.as_deref().unwrap_or("0px")
        );
        if let Some(s) = scale {
            t.push_str(&format!(" scale({})", Value::Number(s)));
        }
        out.push(("transform", t));
    }
    out
}
