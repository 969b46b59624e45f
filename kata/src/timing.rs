//! Wall-clock timing for sync closures and async futures.
//!
//! Both helpers log the elapsed time at `info` and hand back the wrapped
//! value untouched.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::info;

/// A value together with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Run `f` and return its value with the elapsed time. Does not log.
pub fn measure<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let started = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}

/// Run `f`, log how long it took under `label`, and return its value.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let Timed { value, elapsed } = measure(f);
    info!(
        label,
        kind = "sync",
        elapsed_secs = elapsed.as_secs_f64(),
        "timed call finished"
    );
    value
}

/// Await `fut`, log how long it took under `label`, and return its output.
///
/// The clock starts at the first poll, not when the future is created.
pub async fn timed_async<F: Future>(label: &str, fut: F) -> F::Output {
    let started = Instant::now();
    let value = fut.await;
    info!(
        label,
        kind = "async",
        elapsed_secs = started.elapsed().as_secs_f64(),
        "timed call finished"
    );
    value
}
