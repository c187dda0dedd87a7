//! The recurring trigger driving refresh cycles off the interactive thread.

use core::time::Duration;
use std::{
    io,
    sync::{
        Arc,
        mpsc::{RecvTimeoutError, Sender, channel},
    },
    thread::{self, JoinHandle},
};

use tracing::{error, info_span, trace};

use crate::enumerator::SourceEnumerator;

use super::RefreshDriver;

/// How often the source list is re-enumerated.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Recurring background trigger for [`RefreshDriver::try_refresh`].
///
/// Dropping the scheduler stops the trigger and joins the worker; an
/// enumeration already in flight is allowed to finish, and its result is
/// discarded by the driver once the session's receiver is gone.
pub struct RefreshScheduler {
    // Option allows for joining the thread which requires ownership.
    thread: Option<JoinHandle<()>>,
    stop: Option<Sender<()>>,
}

impl RefreshScheduler {
    /// Start ticking `driver` every `interval` on a dedicated worker thread.
    pub fn spawn<E>(driver: Arc<RefreshDriver<E>>, interval: Duration) -> io::Result<Self>
    where
        E: SourceEnumerator + Send + 'static,
    {
        let (stop, ticks) = channel::<()>();

        let thread = thread::Builder::new()
            .name(String::from("Source Refresh"))
            .spawn(move || {
                let _span = info_span!("[Source Refresh]").entered();

                loop {
                    match ticks.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            let outcome = driver.try_refresh();
                            trace!(?outcome, "tick");
                        }

                        // Disconnection is the stop signal.
                        _ => break,
                    }
                }
            })?;

        Ok(Self {
            thread: Some(thread),
            stop: Some(stop),
        })
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        drop(self.stop.take());

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Joining the source refresh thread returned an error");
            }
        }
    }
}
