//! Bounded disturbance queue and cross-thread sender.
//!
//! [`DisturbanceQueue`] buffers commands between submission and the next
//! sub-step. It enforces a capacity limit and assigns monotonic arrival
//! sequence numbers; commands drain in arrival order.
//!
//! [`DisturbanceSender`] lets input collaborators on other threads push
//! commands through a bounded channel. The driver moves channel contents
//! into the queue at the start of each sub-step, so a disturbance can
//! never land in the middle of a field tick.

use std::collections::VecDeque;

use crossbeam_channel::{Sender, TrySendError};
use tidepool_core::{Command, IngressError, Receipt};

/// A command paired with its arrival sequence number.
#[derive(Clone, Debug, PartialEq)]
pub struct QueuedCommand {
    /// The command to apply.
    pub command: Command,
    /// Monotonic arrival number assigned on submission.
    pub arrival_seq: u64,
}

/// Bounded command queue.
#[derive(Debug)]
pub struct DisturbanceQueue {
    queue: VecDeque<QueuedCommand>,
    capacity: usize,
    next_arrival_seq: u64,
}

impl DisturbanceQueue {
    /// Create a queue holding at most `capacity` commands.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "DisturbanceQueue capacity must be at least 1");
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            next_arrival_seq: 0,
        }
    }

    /// Submit one command.
    ///
    /// Every call consumes an arrival number, accepted or not. Commands
    /// for a field the caller reports as unknown are refused with
    /// `UnknownField`; a full queue refuses with `QueueFull`.
    pub fn submit(&mut self, command: Command, field_known: bool) -> Receipt {
        let seq = self.next_arrival_seq;
        self.next_arrival_seq += 1;

        if !field_known {
            return Receipt::rejected(
                seq,
                IngressError::UnknownField {
                    field: command.field,
                },
            );
        }
        if self.queue.len() >= self.capacity {
            return Receipt::rejected(seq, IngressError::QueueFull);
        }

        self.queue.push_back(QueuedCommand {
            command,
            arrival_seq: seq,
        });
        Receipt {
            accepted: true,
            applied_step: None,
            reason: None,
            arrival_seq: seq,
        }
    }

    /// Remove and return every buffered command in arrival order.
    pub fn drain(&mut self) -> Vec<QueuedCommand> {
        self.queue.drain(..).collect()
    }

    /// Number of commands currently buffered.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of commands this queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all pending commands.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Cloneable, `Send` handle for pushing commands from another thread.
///
/// Obtained from [`SimulationDriver::sender`](crate::SimulationDriver::sender).
#[derive(Clone, Debug)]
pub struct DisturbanceSender {
    tx: Sender<Command>,
}

impl DisturbanceSender {
    pub(crate) fn new(tx: Sender<Command>) -> Self {
        Self { tx }
    }

    /// Push a command without blocking.
    ///
    /// Field validation happens when the driver drains the channel; the
    /// resulting receipt is reported by that sub-step.
    ///
    /// # Errors
    ///
    /// [`IngressError::QueueFull`] when the channel is at capacity and
    /// [`IngressError::Disconnected`] once the driver has been dropped.
    pub fn send(&self, command: Command) -> Result<(), IngressError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => IngressError::QueueFull,
            TrySendError::Disconnected(_) => IngressError::Disconnected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidepool_core::{Disturbance, FieldId};

    fn splash(field: u32, x: f64) -> Command {
        Command::new(
            FieldId(field),
            Disturbance::Splash {
                x,
                y: 0.1,
                strength: 1.0,
            },
        )
    }

    // ---- Queue tests ----

    #[test]
    fn accepts_until_full() {
        let mut q = DisturbanceQueue::new(2);
        assert!(q.submit(splash(0, 0.1), true).accepted);
        assert!(q.submit(splash(0, 0.2), true).accepted);
        let r = q.submit(splash(0, 0.3), true);
        assert!(!r.accepted);
        assert_eq!(r.reason, Some(IngressError::QueueFull));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn unknown_field_is_refused() {
        let mut q = DisturbanceQueue::new(4);
        let r = q.submit(splash(9, 0.1), false);
        assert_eq!(
            r.reason,
            Some(IngressError::UnknownField { field: FieldId(9) })
        );
        assert!(q.is_empty());
    }

    #[test]
    fn drains_in_arrival_order() {
        let mut q = DisturbanceQueue::new(8);
        for i in 0..5 {
            q.submit(splash(0, i as f64 / 10.0), true);
        }
        let drained = q.drain();
        let seqs: Vec<u64> = drained.iter().map(|c| c.arrival_seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
        assert_eq!(drained[3].command.disturbance.x(), 0.3);
        assert!(q.is_empty());
    }

    #[test]
    fn arrival_seq_survives_drain_and_rejection() {
        let mut q = DisturbanceQueue::new(1);
        q.submit(splash(0, 0.1), true);
        q.submit(splash(0, 0.1), true); // full
        q.drain();
        let r = q.submit(splash(0, 0.1), true);
        assert_eq!(r.arrival_seq, 2);
    }

    #[test]
    fn clear_discards() {
        let mut q = DisturbanceQueue::new(4);
        q.submit(splash(0, 0.1), true);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn zero_capacity_panics() {
        let _ = DisturbanceQueue::new(0);
    }

    // ---- Sender tests ----

    #[test]
    fn sender_reports_full_and_disconnected() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let sender = DisturbanceSender::new(tx);
        assert!(sender.send(splash(0, 0.1)).is_ok());
        assert_eq!(sender.send(splash(0, 0.2)), Err(IngressError::QueueFull));
        drop(rx);
        assert_eq!(sender.send(splash(0, 0.3)), Err(IngressError::Disconnected));
    }
}
