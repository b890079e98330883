//! Streaming bulk reads.
//!
//! `read_all` pipelines conversion and decoding: a scoped producer thread
//! tokenizes and converts lines while the calling thread decodes and appends.
//! The two meet on a zero-capacity channel, so exactly one record is in
//! flight and output order is input order. The producer always finishes by
//! handing over `Handoff::End`, on exhaustion and on error alike.
//!
//! `Records` offers the same contract without a second thread.

use std::io;
use std::marker::PhantomData;
use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{AssembledRecord, Reader};
use crate::error::Result;

enum Handoff {
    Record(AssembledRecord),
    End,
}

impl<R: io::Read + Send> Reader<R> {
    /// Read every remaining line, appending one `T` per line to `out`.
    ///
    /// On failure, every record decoded before the failing line stays in
    /// `out` and the error is returned. Nothing from the failing line or
    /// after it is appended. Use `Vec<Box<T>>` to collect boxed records.
    pub fn read_all<T: DeserializeOwned + 'static>(&mut self, out: &mut Vec<T>) -> Result<()> {
        let before = out.len();

        let result = thread::scope(|scope| {
            let (tx, rx) = bounded::<Handoff>(0);
            let producer = scope.spawn(move || produce::<R, T>(self, tx));

            let consumed = consume(rx, out);
            let produced = match producer.join() {
                Ok(produced) => produced,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            consumed.and(produced)
        });

        debug!(records = out.len() - before, ok = result.is_ok(), "read_all finished");
        result
    }
}

fn produce<R, T>(reader: &mut Reader<R>, tx: Sender<Handoff>) -> Result<()>
where
    R: io::Read,
    T: DeserializeOwned + 'static,
{
    let result = loop {
        match reader.assemble::<T>() {
            Ok(Some(record)) => {
                // The consumer hung up after a decode error.
                if tx.send(Handoff::Record(record)).is_err() {
                    return Ok(());
                }
            }
            Ok(None) => break Ok(()),
            Err(e) => {
                warn!(error = %e, "stopped producing records");
                break Err(e);
            }
        }
    };
    let _ = tx.send(Handoff::End);
    result
}

fn consume<T: DeserializeOwned>(rx: Receiver<Handoff>, out: &mut Vec<T>) -> Result<()> {
    while let Ok(Handoff::Record(record)) = rx.recv() {
        out.push(record.decode()?);
    }
    Ok(())
}

/// Iterator over decoded records, created by `Reader::records`.
///
/// Yields one item per remaining line and stops after the first error.
pub struct Records<'r, R, T> {
    reader: &'r mut Reader<R>,
    done: bool,
    _target: PhantomData<fn() -> T>,
}

impl<'r, R, T> Records<'r, R, T> {
    pub(super) fn new(reader: &'r mut Reader<R>) -> Self {
        Self {
            reader,
            done: false,
            _target: PhantomData,
        }
    }
}

impl<R: io::Read, T: DeserializeOwned + 'static> Iterator for Records<'_, R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read::<T>() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: io::Read, T: DeserializeOwned + 'static> std::iter::FusedIterator for Records<'_, R, T> {}
