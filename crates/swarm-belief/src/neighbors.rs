//! `NeighborTable` — bounded per-peer observation tracking.
//!
//! # Design
//!
//! An arena of `capacity` fixed slots, each either empty (`PeerId::NONE`) or
//! holding the last-seen observation sequence number for one peer plus the
//! tick that peer was first admitted.  Lookup, insert, and eviction are all
//! linear scans: at the target scale (tens of entries) a scan beats any
//! pointer structure, and the table never allocates after construction.
//!
//! The table is the deduplication layer between the radio and the
//! [`BeliefModel`]: a peer rebroadcasts the same observation many times per
//! sampling interval, and only a changed sequence number may count as new
//! evidence.
//!
//! Entries expire a fixed number of ticks after FIRST contact, not last
//! contact.  A peer that stays in range past the timeout is therefore
//! dropped and re-admitted, and its next report counts as novel regardless
//! of sequence number — see `long_lived_peer_expires_despite_updates` in the
//! test module.

use swarm_core::{AgentConfig, PeerId, Shade, Tick};

use crate::evidence::BeliefModel;

// ── Slot ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Slot {
    /// `PeerId::NONE` marks the slot empty; everything else in the slot is
    /// then meaningless.
    id: PeerId,
    /// Last observation sequence number counted from this peer.
    obs_seq: u16,
    /// Tick at which this peer was admitted into the table.
    first_seen: Tick,
}

impl Slot {
    const EMPTY: Slot = Slot {
        id: PeerId::NONE,
        obs_seq: 0,
        first_seen: Tick::ZERO,
    };
}

// ── NeighborTable ─────────────────────────────────────────────────────────────

/// Fixed-capacity associative store of per-peer last-seen observations.
pub struct NeighborTable {
    slots: Vec<Slot>,
    timeout_ticks: u64,
}

impl NeighborTable {
    /// Allocate `capacity` empty slots.  This is the only allocation the
    /// table ever performs.
    pub fn new(capacity: usize, timeout_ticks: u64) -> Self {
        Self {
            slots: vec![Slot::EMPTY; capacity],
            timeout_ticks,
        }
    }

    pub fn from_config(cfg: &AgentConfig) -> Self {
        Self::new(cfg.neighbor_capacity, cfg.neighbor_timeout_ticks)
    }

    /// Merge one peer report into the table and, when it is novel, into the
    /// belief model.
    ///
    /// Slot selection, in priority order:
    /// 1. the peer's existing slot (update path);
    /// 2. the first empty slot (insert path);
    /// 3. the slot of the oldest resident, which is evicted (insert path).
    ///
    /// On the insert path the report is always counted — a newly tracked
    /// peer's first report is novel by definition.  On the update path it is
    /// counted only when the sequence number changed since the last report,
    /// which filters rebroadcasts of the same underlying observation.
    pub fn ingest(
        &mut self,
        belief: &mut BeliefModel,
        peer: PeerId,
        shade: Shade,
        obs_seq: u16,
        now: Tick,
    ) {
        // The zero sentinel must never occupy a slot.
        if peer.is_none() {
            return;
        }

        // Update path.
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == peer) {
            if slot.obs_seq != obs_seq {
                belief.add_evidence(shade);
            }
            slot.obs_seq = obs_seq;
            return;
        }

        // Insert path: first empty slot, else evict the oldest resident.
        let index = match self.slots.iter().position(|s| s.id.is_none()) {
            Some(empty) => empty,
            None => self.oldest_resident(),
        };

        let slot = &mut self.slots[index];
        slot.id = peer;
        slot.obs_seq = obs_seq;
        slot.first_seen = now;
        belief.add_evidence(shade);
    }

    /// Expire every entry older than the timeout, measured from first
    /// contact.  An entry exactly at the timeout survives one more tick.
    pub fn prune(&mut self, now: Tick) {
        for slot in &mut self.slots {
            if !slot.id.is_none() && now.since(slot.first_seen) > self.timeout_ticks {
                slot.id = PeerId::NONE;
            }
        }
    }

    /// Number of occupied slots.  Instrumentation only — nothing in the
    /// decision path reads this.
    pub fn count_active(&self) -> usize {
        self.slots.iter().filter(|s| !s.id.is_none()).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the slot with the smallest `first_seen` — the longest
    /// resident.  Only called when no slot is empty.
    fn oldest_resident(&self) -> usize {
        self.slots
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| s.first_seen)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
