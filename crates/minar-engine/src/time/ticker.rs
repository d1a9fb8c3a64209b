use std::io;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, RecvTimeoutError, bounded};

/// Fixed-period scheduler driving a tick callback on a dedicated thread.
///
/// Contract:
/// - the callback runs once immediately, then once per period
/// - ticks never overlap (single thread, one callback at a time)
/// - missed deadlines are skipped, never replayed: after a stall the next
///   deadline is re-based on the live clock, so a backgrounded host does not
///   produce a burst of catch-up ticks
/// - [`stop`] is idempotent and joins the thread before returning
///
/// [`stop`]: Ticker::stop
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick thread: one tick on activation, then one per period.
    pub fn spawn<F>(period: Duration, mut tick: F) -> io::Result<Ticker>
    where
        F: FnMut() + Send + 'static,
    {
        // Capacity 1: a stop request is a single latched signal.
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = std::thread::Builder::new()
            .name("minar-ticker".into())
            .spawn(move || {
                let mut ticks: u64 = 0;
                let mut skipped: u64 = 0;
                let mut next = Instant::now();

                loop {
                    tick();
                    ticks += 1;

                    next += period;
                    let now = Instant::now();
                    while next < now {
                        // Stalled past one or more whole periods. Skip them.
                        next += period;
                        skipped += 1;
                    }

                    match stop_rx.recv_deadline(next) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        // Stop signal, or the Ticker handle was dropped.
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }

                log::debug!("ticker stopped after {ticks} ticks ({skipped} skipped)");
            })?;

        log::debug!("ticker started (period {period:?})");

        Ok(Ticker {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Returns `true` until [`stop`](Ticker::stop) has been called.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops the schedule and joins the tick thread.
    ///
    /// Safe to call more than once; later calls are no-ops. After this
    /// returns, the callback is guaranteed not to run again.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // The receiver may already be gone if the thread panicked.
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
