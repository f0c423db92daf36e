//! Unit tests for the codec and mailbox.

use swarm_core::{PeerId, Shade};

use crate::{Frame, Mailbox, Message, crc16};

#[cfg(test)]
mod codec {
    use super::*;

    #[test]
    fn crc_known_vector() {
        // CRC-16/CCITT-FALSE check value for "123456789".
        assert_eq!(crc16(b"123456789"), 0x29b1);
    }

    #[test]
    fn crc_empty_is_init() {
        assert_eq!(crc16(&[]), 0xffff);
    }

    #[test]
    fn encode_decode_roundtrip() {
        let original = Message {
            peer: PeerId(0x1234),
            shade: Shade::Light,
            obs_seq: 0xbeef,
        };
        let frame = original.encode();
        assert!(frame.checksum_ok());
        assert_eq!(Message::decode(&frame), original);
    }

    #[test]
    fn roundtrip_extremes() {
        for &(peer, shade, seq) in &[
            (1u16, Shade::Dark, 0u16),
            (u16::MAX, Shade::Light, u16::MAX),
            (0x00ff, Shade::Dark, 0xff00),
        ] {
            let msg = Message {
                peer: PeerId(peer),
                shade,
                obs_seq: seq,
            };
            assert_eq!(Message::decode(&msg.encode()), msg);
        }
    }

    #[test]
    fn corruption_fails_the_checksum() {
        let frame = Message {
            peer: PeerId(42),
            shade: Shade::Dark,
            obs_seq: 7,
        }
        .encode();

        for i in 0..frame.0.len() {
            let mut corrupted = Frame(frame.0);
            corrupted.0[i] ^= 0x01;
            assert!(!corrupted.checksum_ok(), "flip of byte {i} went unnoticed");
        }
    }

    #[test]
    fn big_endian_field_layout() {
        let frame = Message {
            peer: PeerId(0x0102),
            shade: Shade::Light,
            obs_seq: 0x0304,
        }
        .encode();
        assert_eq!(&frame.0[..5], &[0x01, 0x02, 1, 0x03, 0x04]);
    }
}

#[cfg(test)]
mod mailbox {
    use super::*;

    fn msg(seq: u16) -> Message {
        Message {
            peer: PeerId(1),
            shade: Shade::Light,
            obs_seq: seq,
        }
    }

    #[test]
    fn deliver_take_roundtrip() {
        let mut mb = Mailbox::new();
        assert!(mb.try_deliver(msg(1), 4.2));
        let incoming = mb.take().expect("message present");
        assert_eq!(incoming.message.obs_seq, 1);
        assert!(mb.take().is_none(), "take must consume the slot");
    }

    #[test]
    fn held_slot_drops_arrivals() {
        let mut mb = Mailbox::new();
        mb.hold();
        assert!(!mb.try_deliver(msg(1), 0.0), "delivery while held must fail");
        assert!(mb.take().is_none());

        mb.release();
        assert!(mb.try_deliver(msg(2), 0.0));
        assert_eq!(mb.take().map(|m| m.message.obs_seq), Some(2));
    }

    #[test]
    fn unread_message_is_replaced_not_queued() {
        let mut mb = Mailbox::new();
        assert!(mb.try_deliver(msg(1), 0.0));
        assert!(mb.try_deliver(msg(2), 0.0));
        assert_eq!(mb.take().map(|m| m.message.obs_seq), Some(2));
        assert!(mb.take().is_none(), "only the latest message survives");
    }
}
