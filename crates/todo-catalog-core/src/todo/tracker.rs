//! Request Tracker
//!
//! Hands out monotonically numbered tickets per target. A response is
//! applied only while its ticket is still the newest for that target.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::TodoId;

/// What a request writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The whole list (list, search)
    Collection,
    /// One record (update, toggle, delete)
    Record(TodoId),
    /// A new record; never superseded by other inserts
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    target: Target,
    seq: u64,
    epoch: u64,
}

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    epoch: u64,
    latest: HashMap<Target, u64>,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    inner: Mutex<Inner>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn issue(&self, target: Target) -> Ticket {
        let mut inner = self.lock();
        inner.next_seq += 1;
        let seq = inner.next_seq;
        if target != Target::Insert {
            inner.latest.insert(target, seq);
        }
        Ticket {
            target,
            seq,
            epoch: inner.epoch,
        }
    }

    /// Issued since the last `invalidate_all`
    pub fn is_live(&self, ticket: &Ticket) -> bool {
        self.lock().epoch == ticket.epoch
    }

    /// Live and not overtaken by a newer request on the same target
    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        let inner = self.lock();
        if inner.epoch != ticket.epoch {
            return false;
        }
        match ticket.target {
            Target::Insert => true,
            target => inner.latest.get(&target) == Some(&ticket.seq),
        }
    }

    /// Consume a ticket; returns whether its response should be applied
    pub fn settle(&self, ticket: &Ticket) -> bool {
        let current = self.is_latest(ticket);
        if current && ticket.target != Target::Insert {
            self.lock().latest.remove(&ticket.target);
        }
        current
    }

    /// Orphan every outstanding ticket
    pub fn invalidate_all(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.latest.clear();
    }

    pub fn in_flight(&self) -> usize {
        self.lock().latest.len()
    }
}
