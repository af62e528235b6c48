//! Results of background requests, polled once per frame
//!
//! A request runs on the tokio runtime and sends its result over a
//! `std::sync::mpsc` channel. Starting a new request in a [`Pending`] slot
//! replaces the previous receiver, so only the last-issued request's result
//! is ever delivered.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

use tokio::runtime::Handle;
use tracing::debug;

/// Slot holding at most one in-flight request
#[derive(Debug)]
pub struct Pending<T> {
    rx: Option<Receiver<T>>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { rx: None }
    }
}

impl<T: Send + 'static> Pending<T> {
    /// Run `fut` on the runtime; any earlier request in this slot is abandoned
    pub fn start<F>(&mut self, runtime: &Handle, fut: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = channel();
        runtime.spawn(async move {
            // Receiver is gone when a newer request replaced this one
            let _ = tx.send(fut.await);
        });
        self.rx = Some(rx);
    }
}

impl<T> Pending<T> {
    /// Slot that already holds a result
    #[cfg(test)]
    pub fn ready(value: T) -> Self {
        let (tx, rx) = channel();
        let _ = tx.send(value);
        Self { rx: Some(rx) }
    }

    pub fn is_busy(&self) -> bool {
        self.rx.is_some()
    }

    /// Forget the in-flight request
    #[cfg(test)]
    pub fn cancel(&mut self) {
        self.rx = None;
    }

    /// Take the result if it has arrived
    pub fn poll(&mut self) -> Option<T> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(value) => {
                self.rx = None;
                Some(value)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                debug!("Background request ended without a result");
                self.rx = None;
                None
            }
        }
    }
}
