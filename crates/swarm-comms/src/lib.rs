//! `swarm-comms` — the communication boundary of the `rust_swarm` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`message`] | `Message`, fixed-width `Frame`, CRC-16 transport checksum  |
//! | [`mailbox`] | `Mailbox` — single-slot, held-flag-guarded inbound buffer  |
//!
//! # Division of labor
//!
//! The codec is deliberately dumb: five payload bytes in a fixed layout plus
//! a checksum.  Integrity enforcement belongs to the transport — it calls
//! [`Frame::checksum_ok`] before decoding and simply never delivers a
//! corrupted frame.  [`Message::decode`] therefore does not re-validate.
//!
//! The mailbox models the one concurrency hazard in the system: a receive
//! callback that can fire between agent steps.  It is a single slot, not a
//! queue — while the owning agent holds it for reading, arrivals are dropped
//! on the floor, and an unread message is silently replaced by a newer one.
//! The statistical layer upstream is built to tolerate exactly this kind of
//! loss.

pub mod mailbox;
pub mod message;

#[cfg(test)]
mod tests;

pub use mailbox::{Incoming, Mailbox};
pub use message::{FRAME_LEN, Frame, Message, PAYLOAD_LEN, crc16};
