use crate::constants::*;
use crate::dom;
use crate::notice::{triggered_notice, TriggeredNotice};
use crate::render::BurstCanvas;
use crate::style;
use instant::{Duration, Instant};
use scrollseq_core::{journey, MotionPolicy, SceneSequencer, SequencerConfig, TriggerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct SceneTarget {
    scene: String,
    el: web::HtmlElement,
}

struct SectionState {
    container: web::HtmlElement,
    targets: Vec<SceneTarget>,
    canvas: Option<BurstCanvas>,
    seq: SceneSequencer,
    last_instant: Instant,
    last_state: TriggerState,
    raf_id: Option<i32>,
}

impl SectionState {
    fn sample_scroll(&mut self) {
        let Some((_, viewport_h)) = dom::viewport_size() else {
            return;
        };
        let (top, height) = dom::container_rect(&self.container);
        self.seq.observe_rect(top, height, viewport_h);
    }

    fn on_resize(&mut self) {
        if let Some((w, _)) = dom::viewport_size() {
            self.seq.set_viewport_width(w);
        }
        if let Some(c) = &self.canvas {
            c.resize();
        }
        self.sample_scroll();
    }

    fn frame(&mut self) -> Option<TriggeredNotice> {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let report = self.seq.tick(dt);
        self.apply_styles();

        if report.state != self.last_state {
            _ = self.container.set_attribute(STATE_ATTR, report.state.as_str());
            self.last_state = report.state;
        }
        if let Some(c) = &mut self.canvas {
            c.draw(self.seq.burst());
        }
        triggered_notice(&report)
    }

    fn apply_styles(&self) {
        let outputs = self.seq.outputs();
        for t in &self.targets {
            let Some(frame) = outputs.scene(&t.scene) else {
                continue;
            };
            let css = t.el.style();
            for (prop, value) in style::declarations(frame) {
                _ = css.set_property(prop, &value);
            }
        }
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// One mounted scroll-driven section. Listeners and the frame loop live
/// exactly as long as this value; dropping it tears everything down.
pub struct SectionMount {
    state: Rc<RefCell<SectionState>>,
    tick: FrameClosure,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl SectionMount {
    pub fn new(container: web::HtmlElement) -> anyhow::Result<Self> {
        let preset = container
            .get_attribute(SEQUENCE_ATTR)
            .ok_or_else(|| anyhow::anyhow!("container has no {SEQUENCE_ATTR}"))?;
        let scenes = journey::preset(&preset)
            .ok_or_else(|| anyhow::anyhow!("unknown scroll sequence {preset:?}"))??;

        let width = dom::viewport_size().map(|(w, _)| w).unwrap_or(1280.0);
        let policy = MotionPolicy::resolve(dom::prefers_reduced_motion(), width);
        let config = SequencerConfig {
            snap_reduced_motion: container.has_attribute(SNAP_ATTR),
            ..SequencerConfig::default()
        };
        let seq = SceneSequencer::new(config, scenes, policy)?;

        let targets = dom::query_html_elements(&container, &format!("[{SCENE_ATTR}]"))
            .into_iter()
            .filter_map(|el| {
                let scene = el.get_attribute(SCENE_ATTR)?;
                Some(SceneTarget { scene, el })
            })
            .collect::<Vec<_>>();
        let canvas = dom::query_html_elements(&container, &format!("[{CANVAS_ATTR}]"))
            .into_iter()
            .next()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .and_then(|c| match BurstCanvas::new(c) {
                Ok(bc) => Some(bc),
                Err(e) => {
                    log::warn!("[mount] burst canvas disabled: {:?}", e);
                    None
                }
            });
        log::info!(
            "[mount] {preset}: {} scene targets, canvas={}, reduced_motion={}",
            targets.len(),
            canvas.is_some(),
            policy.reduced_motion
        );
        _ = container.set_attribute(STATE_ATTR, TriggerState::Idle.as_str());

        let state = Rc::new(RefCell::new(SectionState {
            container,
            targets,
            canvas,
            seq,
            last_instant: Instant::now(),
            last_state: TriggerState::Idle,
            raf_id: None,
        }));

        let tick: FrameClosure = Rc::new(RefCell::new(None));
        {
            let state_tick = state.clone();
            let tick_again = tick.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let (more, notice) = {
                    let mut s = state_tick.borrow_mut();
                    s.raf_id = None;
                    let notice = s.frame().map(|n| (s.container.clone(), n));
                    (s.seq.needs_frame(), notice)
                };
                if more {
                    request_frame(&state_tick, &tick_again);
                }
                // listeners may unmount this section; run them once the
                // state is released and this callback has returned
                if let Some((container, notice)) = notice {
                    spawn_local(async move { dispatch_triggered(&container, notice) });
                }
            }) as Box<dyn FnMut()>));
        }

        let on_scroll = {
            let state = state.clone();
            let tick = tick.clone();
            Closure::wrap(Box::new(move || {
                state.borrow_mut().sample_scroll();
                request_frame(&state, &tick);
            }) as Box<dyn FnMut()>)
        };
        let on_resize = {
            let state = state.clone();
            let tick = tick.clone();
            Closure::wrap(Box::new(move || {
                state.borrow_mut().on_resize();
                request_frame(&state, &tick);
            }) as Box<dyn FnMut()>)
        };

        if let Some(window) = web::window() {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &opts,
            );
            _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }

        // initial measurement so the first frame has a sample
        state.borrow_mut().sample_scroll();
        request_frame(&state, &tick);

        Ok(Self {
            state,
            tick,
            on_scroll,
            on_resize,
        })
    }
}

fn dispatch_triggered(container: &web::HtmlElement, notice: TriggeredNotice) {
    let detail = js_sys::Object::new();
    _ = js_sys::Reflect::set(&detail, &"progress".into(), &(notice.progress as f64).into());
    _ = js_sys::Reflect::set(&detail, &"effect".into(), &notice.effect.into());
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(TRIGGERED_EVENT, &init) {
        Ok(ev) => {
            _ = container.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[mount] could not create {TRIGGERED_EVENT}: {:?}", e),
    }
}

fn request_frame(state: &Rc<RefCell<SectionState>>, tick: &FrameClosure) {
    let mut s = state.borrow_mut();
    if s.raf_id.is_some() || s.seq.is_torn_down() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let Some(cb) = tick_ref.as_ref() else {
        return;
    };
    // waking from idle: don't count the idle gap as one long frame
    let idle = s.last_instant.elapsed();
    if idle > Duration::from_secs_f64(WAKE_DT_SEC) {
        s.last_instant = Instant::now() - Duration::from_secs_f64(WAKE_DT_SEC);
    }
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => s.raf_id = Some(id),
        Err(e) => log::warn!("[mount] requestAnimationFrame failed: {:?}", e),
    }
}

impl Drop for SectionMount {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
            if let Some(id) = self.state.borrow_mut().raf_id.take() {
                _ = window.cancel_animation_frame(id);
            }
        }
        {
            let mut s = self.state.borrow_mut();
            s.seq.teardown();
            if let Some(c) = &mut s.canvas {
                c.clear();
            }
        }
        // break the closure's reference to itself
        self.tick.borrow_mut().take();
        log::info!("[mount] section unmounted");
    }
}
