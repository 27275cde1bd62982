#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod mount;
mod notice;
mod render;
mod style;

use constants::SEQUENCE_ATTR;
use mount::SectionMount;

thread_local! {
    // one sequencer per mounted section; dropping a mount tears it down
    static MOUNTS: RefCell<Vec<SectionMount>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollseq-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let count = mount_all()?;
    if count == 0 {
        log::warn!("no [{SEQUENCE_ATTR}] sections on this page");
    }
    Ok(())
}

fn mount_all() -> anyhow::Result<usize> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let list = document
        .query_selector_all(&format!("[{SEQUENCE_ATTR}]"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut mounted = Vec::new();
    for i in 0..list.length() {
        let Some(el) = list
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        match SectionMount::new(el) {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[mount] skipped section: {:?}", e),
        }
    }
    let count = mounted.len();
    MOUNTS.with(|m| m.borrow_mut().extend(mounted));
    Ok(count)
}

/// Tear down every mounted section (listeners, frame loop, pending timers).
#[wasm_bindgen]
pub fn unmount_all() {
    let drained: Vec<SectionMount> = MOUNTS.with(|m| m.borrow_mut().drain(..).collect());
    log::info!("unmounting {} sections", drained.len());
    drop(drained);
}

/// Re-scan the document after client-side navigation swapped page content.
#[wasm_bindgen]
pub fn remount() -> Result<u32, JsValue> {
    unmount_all();
    mount_all()
        .map(|n| n as u32)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
