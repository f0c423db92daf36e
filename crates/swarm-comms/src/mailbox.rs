//! Single-slot inbound message buffer with explicit try-claim semantics.
//!
//! The receive callback and the agent's step function race over exactly one
//! shared resource: the pending inbound message.  The resolution is a
//! single-producer/single-consumer slot:
//!
//! - the transport calls [`Mailbox::try_deliver`], which never blocks — it
//!   either stores the message (replacing any unread predecessor; latest
//!   wins) or, while the consumer holds the slot, drops it silently;
//! - the agent brackets its table update with [`hold`][Mailbox::hold] /
//!   [`release`][Mailbox::release] and consumes with
//!   [`take`][Mailbox::take].
//!
//! At most one inbound message is considered per tick; everything else is
//! lost by design, and the evidence model upstream tolerates that loss.

use crate::message::Message;

/// A delivered message plus the transport's distance estimate for the
/// sender.  The distance is part of the receive-callback contract; the core
/// decision path does not consume it.
#[derive(Copy, Clone, Debug)]
pub struct Incoming {
    pub message: Message,
    pub distance: f32,
}

/// The single-slot inbound buffer.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Option<Incoming>,
    held: bool,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer side.  Returns `true` if the message was stored, `false` if
    /// it was dropped because the consumer currently holds the slot.
    ///
    /// Storing over an unread message replaces it — the slot is not a queue.
    pub fn try_deliver(&mut self, message: Message, distance: f32) -> bool {
        if self.held {
            return false;
        }
        self.slot = Some(Incoming { message, distance });
        true
    }

    /// Consumer side: claim the slot for the duration of the table update.
    /// Deliveries while held are dropped, not deferred.
    #[inline]
    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Release the claim taken by [`hold`][Self::hold].
    #[inline]
    pub fn release(&mut self) {
        self.held = false;
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Remove and return the pending message, if any.
    #[inline]
    pub fn take(&mut self) -> Option<Incoming> {
        self.slot.take()
    }
}
