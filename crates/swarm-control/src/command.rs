//! The per-tick command a controller produces for its robot.

use swarm_core::{FrequencyMask, WheelCommand};

/// What a robot wants to do this tick.
///
/// Produced by [`Controller::act`][crate::Controller::act] and consumed by
/// the driver's apply phase.  Fields addressing capabilities the robot does
/// not have are silently ignored — a speaker-less robot's `emission` goes
/// nowhere.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Command {
    /// Wheel speed command for the locomotion capability.
    pub wheels: WheelCommand,

    /// Frequencies to emit this tick.  Replaces the speaker's profile
    /// wholesale; emit [`FrequencyMask::EMPTY`] to go silent.
    pub emission: FrequencyMask,
}

impl Command {
    /// Stand still, stay silent.
    pub const IDLE: Command = Command {
        wheels: WheelCommand::STOP,
        emission: FrequencyMask::EMPTY,
    };

    /// Drive with the given wheel speeds, silent.
    pub fn drive(left: f32, right: f32) -> Self {
        Command { wheels: WheelCommand::new(left, right), ..Command::IDLE }
    }

    /// Add an emission profile to this command.
    pub fn emitting(mut self, mask: FrequencyMask) -> Self {
        self.emission = mask;
        self
    }
}
