//! Fluent construction of `RobotStore` + `RobotRngs`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut builder = RobotStoreBuilder::new(/*seed=*/ 42);
//!
//! builder
//!     .robot(Pose::new(0.0, 0.0, 0.0))
//!     .drive(DifferentialDrive::new(0.5, 2.0, 0.05)?)
//!     .energy(EnergyMeter::new(Box::new(ConstantRate(-0.1))))
//!     .speaker(Speaker::new(20)?)
//!     .microphone(Microphone::four_way(0.5, 5.0, 20, Box::new(StepResponse))?);
//!
//! builder.robot(Pose::new(1.0, 0.0, 0.0)); // a bare body, no capabilities
//!
//! let (store, rngs) = builder.build();
//! ```
//!
//! IDs are assigned densely in the order robots are declared; the first
//! `robot()` call gets `RobotId(0)`.

use swarm_core::Pose;
use swarm_energy::EnergyMeter;
use swarm_motion::DifferentialDrive;
use swarm_sound::{Microphone, Speaker};

use crate::{RobotRngs, RobotStore};

// ── Per-robot draft ───────────────────────────────────────────────────────────

struct RobotDraft {
    pose:       Pose,
    drive:      Option<DifferentialDrive>,
    energy:     Option<EnergyMeter>,
    speaker:    Option<Speaker>,
    microphone: Option<Microphone>,
}

/// Handle returned by [`RobotStoreBuilder::robot`]; chain capability setters
/// on it to equip the robot being declared.
pub struct RobotBuilder<'a> {
    draft: &'a mut RobotDraft,
}

impl RobotBuilder<'_> {
    /// Equip the locomotion capability.
    pub fn drive(self, drive: DifferentialDrive) -> Self {
        self.draft.drive = Some(drive);
        self
    }

    /// Equip the energy-bookkeeping capability.
    pub fn energy(self, meter: EnergyMeter) -> Self {
        self.draft.energy = Some(meter);
        self
    }

    /// Equip the sound-emission capability.
    pub fn speaker(self, speaker: Speaker) -> Self {
        self.draft.speaker = Some(speaker);
        self
    }

    /// Equip the sound-reception capability.
    pub fn microphone(self, microphone: Microphone) -> Self {
        self.draft.microphone = Some(microphone);
        self
    }
}

// ── RobotStoreBuilder ─────────────────────────────────────────────────────────

/// Collects robot declarations and produces the SoA store plus the per-robot
/// RNG bank in one step.
///
/// Capability configuration (drive parameters, sensor geometry, channel
/// widths) is validated by the capability constructors *before* it reaches
/// this builder, so `build` itself cannot fail.
pub struct RobotStoreBuilder {
    seed:   u64,
    drafts: Vec<RobotDraft>,
}

impl RobotStoreBuilder {
    /// Create a builder using `seed` as the run's global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, drafts: Vec::new() }
    }

    /// Declare a robot at `pose` with no capabilities; chain setters on the
    /// returned [`RobotBuilder`] to equip it.
    pub fn robot(&mut self, pose: Pose) -> RobotBuilder<'_> {
        let index = self.drafts.len();
        self.drafts.push(RobotDraft {
            pose,
            drive: None,
            energy: None,
            speaker: None,
            microphone: None,
        });
        RobotBuilder { draft: &mut self.drafts[index] }
    }

    /// Number of robots declared so far.
    pub fn count(&self) -> usize {
        self.drafts.len()
    }

    /// Construct `RobotStore` and `RobotRngs`.
    pub fn build(self) -> (RobotStore, RobotRngs) {
        let count = self.drafts.len();

        let mut pose       = Vec::with_capacity(count);
        let mut drive      = Vec::with_capacity(count);
        let mut energy     = Vec::with_capacity(count);
        let mut speaker    = Vec::with_capacity(count);
        let mut microphone = Vec::with_capacity(count);

        for draft in self.drafts {
            pose.push(draft.pose);
            drive.push(draft.drive);
            energy.push(draft.energy);
            speaker.push(draft.speaker);
            microphone.push(draft.microphone);
        }

        let store = RobotStore::new(pose, drive, energy, speaker, microphone);
        let rngs = RobotRngs::new(count, self.seed);
        (store, rngs)
    }
}
