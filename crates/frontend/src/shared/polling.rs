use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Calls `refresh` every `interval_ms` until the owning component is
/// unmounted. The first call happens after one interval.
pub fn spawn_refresh_loop(interval_ms: u32, refresh: impl Fn() + 'static) {
    let alive = Arc::new(AtomicBool::new(true));
    let alive_for_cleanup = alive.clone();
    on_cleanup(move || alive_for_cleanup.store(false, Ordering::Relaxed));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !alive.load(Ordering::Relaxed) {
                log::debug!("refresh loop stopped");
                break;
            }
            refresh();
        }
    });
}
