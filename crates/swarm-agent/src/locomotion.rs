//! Random-walk locomotion with boundary recovery.
//!
//! # State machine
//!
//! ```text
//!  Init ──► Straight ──(exp duration)──► Turn ──(uniform duration)──┐
//!             ▲                                                     │
//!             └─────────────────────────────────────────────────────┘
//!
//!  any state ──(gray reading)──► Bounce ──(non-gray reading)──► Init
//! ```
//!
//! The walk performs at most one transition per tick (the phases are an
//! else-if chain, as in a microcontroller loop).  A gray reading means the
//! agent has wandered into the ambiguous margin around the feature area;
//! `Bounce` turns it back like a screensaver logo until the reading clears.
//!
//! Only `Straight` is a safe-to-sample phase: mid-turn and mid-recovery
//! readings are smeared by rotation or taken at the arena margin, so the
//! behavior layer must not trust them.

use swarm_core::{AgentConfig, AgentRng, LightLevel, Tick};

// ── MotorCommand ──────────────────────────────────────────────────────────────

/// What the motors should do this tick.  Consumed by the external
/// motor-command setter; the core never looks at it again.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MotorCommand {
    Straight,
    TurnLeft,
    TurnRight,
}

impl MotorCommand {
    fn turn(left: bool) -> MotorCommand {
        if left {
            MotorCommand::TurnLeft
        } else {
            MotorCommand::TurnRight
        }
    }
}

// ── WalkPhase ─────────────────────────────────────────────────────────────────

/// The locomotion phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WalkPhase {
    /// Pre-walk: next tick draws a straight duration and starts moving.
    Init,
    /// Driving forward.  The only phase in which sensing is safe.
    Straight,
    /// Rotating in place for a uniformly drawn duration.
    Turn,
    /// Boundary recovery: turning away from the gray margin until the
    /// sensor reads valid territory again.
    Bounce,
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Non-blocking random-walk controller.
#[derive(Debug)]
pub struct RandomWalk {
    phase: WalkPhase,
    /// Tick of the last phase transition.
    last_changed: Tick,
    /// Planned duration of the current phase, drawn at entry.
    phase_ticks: u64,
    mean_straight_ticks: u64,
    max_turn_ticks: u64,
    /// Direction of the current turn or bounce.
    turn_left: bool,
    motor: MotorCommand,
}

impl RandomWalk {
    pub fn new(cfg: &AgentConfig) -> Self {
        Self {
            phase: WalkPhase::Init,
            last_changed: Tick::ZERO,
            phase_ticks: 0,
            mean_straight_ticks: cfg.rw_mean_straight_ticks,
            max_turn_ticks: cfg.rw_max_turn_ticks,
            turn_left: false,
            motor: MotorCommand::Straight,
        }
    }

    /// Advance the walk by one tick and return the motor command.
    ///
    /// A gray reading is the boundary-crossing signal and overrides whatever
    /// phase is running.
    pub fn step(&mut self, level: LightLevel, now: Tick, rng: &mut AgentRng) -> MotorCommand {
        let at_boundary = level == LightLevel::Gray;

        if at_boundary && self.phase != WalkPhase::Bounce {
            // Boundary check before anything else.
            self.phase = WalkPhase::Bounce;
            self.turn_left = rng.coin();
            self.motor = MotorCommand::turn(self.turn_left);
        } else if self.phase == WalkPhase::Bounce && !at_boundary {
            self.phase = WalkPhase::Init;
        } else if self.phase == WalkPhase::Init {
            self.phase = WalkPhase::Straight;
            self.last_changed = now;
            self.phase_ticks = rng.exp_ticks(self.mean_straight_ticks);
            self.motor = MotorCommand::Straight;
        } else if self.phase == WalkPhase::Straight && now.0 > self.last_changed.0 + self.phase_ticks
        {
            self.phase = WalkPhase::Turn;
            self.last_changed = now;
            self.phase_ticks = rng.uniform_ticks(self.max_turn_ticks);
            self.turn_left = rng.coin();
            self.motor = MotorCommand::turn(self.turn_left);
        } else if self.phase == WalkPhase::Turn && now.0 > self.last_changed.0 + self.phase_ticks {
            self.phase = WalkPhase::Straight;
            self.last_changed = now;
            self.phase_ticks = rng.exp_ticks(self.mean_straight_ticks);
            self.motor = MotorCommand::Straight;
        }

        self.motor
    }

    /// `true` while a fresh sensor sample may be trusted.
    #[inline]
    pub fn sensing_safe(&self) -> bool {
        self.phase == WalkPhase::Straight
    }

    #[inline]
    pub fn phase(&self) -> WalkPhase {
        self.phase
    }
}
