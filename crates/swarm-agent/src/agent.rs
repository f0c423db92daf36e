//! `SwarmAgent` — one swarm member's complete decision core.

use swarm_belief::{BeliefModel, Decision, NeighborTable};
use swarm_comms::{Frame, Mailbox, Message};
use swarm_core::{AgentConfig, AgentRng, PeerId, Shade, Tick};

use crate::behavior::TaskState;
use crate::indicator::Rgb;
use crate::locomotion::{MotorCommand, RandomWalk};
use crate::sensing::{SensingGate, classify};

/// Everything one agent owns: belief state, neighbor table, sensing gate,
/// locomotion, inbound mailbox, and the task state machine.
///
/// The configuration is immutable after construction; all mutation happens
/// through [`step`][Self::step] and the transport callbacks
/// [`deliver`][Self::deliver] / [`pending_frame`][Self::pending_frame].
pub struct SwarmAgent {
    peer: PeerId,
    cfg: AgentConfig,

    belief: BeliefModel,
    neighbors: NeighborTable,
    gate: SensingGate,
    walk: RandomWalk,
    mailbox: Mailbox,

    task: TaskState,
    /// Tick of the last task-state transition (opens the dissemination
    /// window in non-simultaneous mode).
    task_changed: Tick,

    /// Incremented on every accepted self-observation; broadcast so peers
    /// can tell a fresh observation from a rebroadcast.
    observation_seq: u16,

    /// The latest accepted self-observation — the broadcast payload until a
    /// decision (with positive feedback) replaces it.
    last_observation: Shade,

    /// Last computed posterior mass below 0.5, for the confidence indicator.
    last_confidence: f64,

    color: Rgb,
}

impl SwarmAgent {
    /// Build an agent from a validated configuration.  `peer` must be
    /// non-zero (the builder derives it from the agent index).
    pub fn new(peer: PeerId, cfg: AgentConfig) -> Self {
        Self {
            belief: BeliefModel::new(&cfg),
            neighbors: NeighborTable::from_config(&cfg),
            gate: SensingGate::new(&cfg),
            walk: RandomWalk::new(&cfg),
            mailbox: Mailbox::new(),
            task: TaskState::initial(cfg.allow_simultaneity),
            task_changed: Tick::ZERO,
            observation_seq: 0,
            last_observation: Shade::Dark,
            last_confidence: 0.5,
            color: Rgb::NEUTRAL,
            peer,
            cfg,
        }
    }

    // ── The tick step ─────────────────────────────────────────────────────

    /// Advance the agent by one tick.
    ///
    /// Order matters and mirrors the controller loop:
    /// 1. classify the raw sensor magnitude;
    /// 2. advance locomotion (the gray band forces boundary recovery);
    /// 3. while observe-capable and sensing-safe, poll the sensing gate — a
    ///    fresh sample becomes evidence, bumps the observation sequence, and
    ///    in non-simultaneous mode opens the dissemination window;
    /// 4. drain the inbound mailbox (every tick, regardless of task state)
    ///    through the neighbor table, then prune expired entries — the
    ///    mailbox stays held for the duration so racing deliveries drop;
    /// 5. refresh the status color;
    /// 6. close the dissemination window once its duration has elapsed.
    pub fn step(&mut self, now: Tick, raw_light: u16, rng: &mut AgentRng) -> MotorCommand {
        let level = classify(raw_light, &self.cfg);
        let motor = self.walk.step(level, now, rng);

        // ── Self-observation ──────────────────────────────────────────────
        if self.task.can_observe() && self.walk.sensing_safe() {
            if let Some(shade) = self.gate.poll(level, now) {
                self.belief.add_evidence(shade);
                if !self.belief.decision().is_decided() {
                    self.last_confidence = self.belief.evaluate_decision();
                }
                self.last_observation = shade;
                self.observation_seq = self.observation_seq.wrapping_add(1);
                if !self.cfg.allow_simultaneity {
                    self.task = TaskState::Disseminate;
                    self.task_changed = now;
                }
            }
        }

        // ── Inbound evidence ──────────────────────────────────────────────
        self.mailbox.hold();
        if let Some(incoming) = self.mailbox.take() {
            let Message { peer, shade, obs_seq } = incoming.message;
            self.neighbors.ingest(&mut self.belief, peer, shade, obs_seq, now);
            if !self.belief.decision().is_decided() {
                self.last_confidence = self.belief.evaluate_decision();
            }
        }
        self.neighbors.prune(now);
        self.mailbox.release();

        // ── Status indicator ──────────────────────────────────────────────
        self.color = match self.belief.decision() {
            Decision::Dark => Rgb::DECIDED_DARK,
            Decision::Light => Rgb::DECIDED_LIGHT,
            Decision::Undecided => Rgb::confidence_blend(self.last_confidence),
        };

        // ── Dissemination window re-entry ─────────────────────────────────
        if !self.cfg.allow_simultaneity
            && self.task == TaskState::Disseminate
            && self.task_changed.0 + self.cfg.disseminate_ticks <= now.0
        {
            self.task = TaskState::Observe;
        }

        motor
    }

    // ── Transport callbacks ───────────────────────────────────────────────

    /// Receive callback: offer a transport-validated message to the inbound
    /// mailbox.  Returns `false` if the mailbox was held and the message
    /// dropped.
    #[inline]
    pub fn deliver(&mut self, message: Message, distance: f32) -> bool {
        self.mailbox.try_deliver(message, distance)
    }

    /// Transmit poll: the frame to broadcast this tick, if the task state
    /// allows dissemination.
    ///
    /// The evidence bit is the latest raw observation — unless the agent has
    /// decided and positive feedback is enabled, in which case the fixed
    /// decision is broadcast instead (certainty, not noise).
    pub fn pending_frame(&self) -> Option<Frame> {
        if !self.task.can_disseminate() {
            return None;
        }
        let shade = match self.belief.decision().shade() {
            Some(decided) if self.cfg.use_positive_feedback => decided,
            _ => self.last_observation,
        };
        Some(
            Message {
                peer: self.peer,
                shade,
                obs_seq: self.observation_seq,
            }
            .encode(),
        )
    }

    // ── Read-only telemetry surface ───────────────────────────────────────

    #[inline]
    pub fn peer(&self) -> PeerId {
        self.peer
    }

    #[inline]
    pub fn decision(&self) -> Decision {
        self.belief.decision()
    }

    /// `(light_count, dark_count)` accumulated so far.
    #[inline]
    pub fn evidence(&self) -> (u32, u32) {
        self.belief.counts()
    }

    /// How many self-observations have been accepted.
    #[inline]
    pub fn observation_count(&self) -> u16 {
        self.observation_seq
    }

    /// Occupied neighbor-table slots.
    #[inline]
    pub fn tracked_neighbors(&self) -> usize {
        self.neighbors.count_active()
    }

    #[inline]
    pub fn task(&self) -> TaskState {
        self.task
    }

    /// The current status color.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Last computed posterior mass below 0.5.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.last_confidence
    }
}
