//! Derived values that follow a changing snapshot.
//!
//! A page holds its snapshot in a `watch` channel; each display string is a
//! [`derive`]d receiver that is recomputed whenever the snapshot is replaced.

use tokio::sync::watch;
use tracing::trace;

/// Spawn a task that keeps `f(&source)` up to date.
///
/// The returned receiver starts with the value for the current snapshot. The
/// task ends when the source sender is dropped or every derived receiver is
/// gone. Must be called inside a tokio runtime.
pub fn derive<S, T, F>(mut source: watch::Receiver<S>, f: F) -> watch::Receiver<T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(&S) -> T + Send + 'static,
{
    let initial = f(&*source.borrow_and_update());
    let (tx, rx) = watch::channel(initial);

    tokio::spawn(async move {
        while source.changed().await.is_ok() {
            let value = f(&*source.borrow_and_update());
            if tx.send(value).is_err() {
                break;
            }
        }
        trace!("derived value task finished");
    });

    rx
}
