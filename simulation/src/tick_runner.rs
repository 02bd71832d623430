//! Tick Runner - background thread that ticks the pet world at a fixed interval

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, PoisonError,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::world::{PetWorld, TickResult};

/// Owns the timer thread. Dropping the runner stops the thread.
pub struct TickRunner {
    is_running: Arc<AtomicBool>,
    stop_tx: Option<Sender<()>>,
    thread_handle: Option<JoinHandle<()>>,
    interval_ms: u64,
}

impl TickRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            stop_tx: None,
            thread_handle: None,
            interval_ms: 0,
        }
    }

    /// Start ticking `world` every `interval_ms`.
    ///
    /// `callback` receives every tick result, after the world lock is released.
    pub fn start<F>(&mut self, world: Arc<Mutex<PetWorld>>, interval_ms: u64, callback: F)
    where
        F: Fn(TickResult) + Send + 'static,
    {
        if self.is_running.load(Ordering::Relaxed) {
            warn!("tick runner already running");
            return;
        }

        info!(interval_ms, "starting tick runner");
        self.is_running.store(true, Ordering::Relaxed);
        self.interval_ms = interval_ms;
        let running = Arc::clone(&self.is_running);
        let interval = Duration::from_millis(interval_ms.max(1));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                // Wait out the interval unless asked to stop first
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                let result = {
                    let mut w = world.lock().unwrap_or_else(PoisonError::into_inner);
                    w.tick(Utc::now())
                };
                callback(result);
            }
            running.store(false, Ordering::Relaxed);
            info!("tick runner thread stopped");
        });

        self.stop_tx = Some(stop_tx);
        self.thread_handle = Some(handle);
    }

    /// Stop ticking and wait for the thread to exit.
    pub fn stop(&mut self) {
        let Some(handle) = self.thread_handle.take() else {
            return;
        };

        info!("stopping tick runner");
        if let Some(tx) = self.stop_tx.take() {
            // The thread may already be gone
            let _ = tx.send(());
        }
        if handle.join().is_err() {
            warn!("tick runner thread panicked");
        }
        self.is_running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Interval of the current (or last) run.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl Default for TickRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
