/// Periodic live-update timer for screens that emulate a data feed.
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run `tick` every `interval_ms` until the calling component unmounts.
/// Must be called inside a reactive owner; cancellation rides on
/// `on_cleanup`, so there is nothing in flight to abort mid-operation.
pub fn start_polling(interval_ms: u32, tick: impl Fn() + 'static) {
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });
    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
}
