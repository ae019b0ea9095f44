//! Unit tests for commands and the no-op controller.

use swarm_arena::Arena;
use swarm_core::{FrequencyMask, Pose, RobotId, RobotRng, Tick, WheelCommand};
use swarm_robot::RobotStoreBuilder;

use crate::{Command, Controller, NoopController, SimContext};

#[test]
fn command_builders() {
    let cmd = Command::drive(0.5, -0.5).emitting(FrequencyMask(0b10));
    assert_eq!(cmd.wheels, WheelCommand::new(0.5, -0.5));
    assert_eq!(cmd.emission, FrequencyMask(0b10));
    assert_eq!(Command::default(), Command::IDLE);
}

#[test]
fn noop_controller_is_idle() {
    let mut builder = RobotStoreBuilder::new(1);
    builder.robot(Pose::new(0.0, 0.0, 0.0));
    let (store, mut rngs) = builder.build();
    let arena = Arena::new(10.0, 10.0).unwrap();

    let ctx = SimContext::new(Tick(0), 0.05, &store, &arena, FrequencyMask::EMPTY);
    let cmd = NoopController.act(RobotId(0), &ctx, rngs.get_mut(RobotId(0)));
    assert_eq!(cmd, Command::IDLE);
}

#[test]
fn context_exposes_previous_tick_state() {
    let mut builder = RobotStoreBuilder::new(1);
    builder.robot(Pose::new(2.0, 3.0, 0.0));
    let (store, _) = builder.build();
    let arena = Arena::new(10.0, 10.0).unwrap();

    let ctx = SimContext::new(Tick(7), 0.05, &store, &arena, FrequencyMask(0b101));
    assert_eq!(ctx.tick, Tick(7));
    assert_eq!(ctx.ambient, FrequencyMask(0b101));
    assert_eq!(ctx.robots.pose[0].pos.x, 2.0);
}

/// The RNG parameter makes per-robot stochastic behaviour reproducible.
struct Jitter;

impl Controller for Jitter {
    fn act(&self, _robot: RobotId, _ctx: &SimContext<'_>, rng: &mut RobotRng) -> Command {
        let wobble: f32 = rng.gen_range(-0.1..0.1);
        Command::drive(0.5 + wobble, 0.5 - wobble)
    }
}

#[test]
fn stochastic_controllers_are_reproducible() {
    let mut builder = RobotStoreBuilder::new(99);
    builder.robot(Pose::new(0.0, 0.0, 0.0));
    let (store, _) = builder.build();
    let arena = Arena::new(10.0, 10.0).unwrap();
    let ctx = SimContext::new(Tick(0), 0.05, &store, &arena, FrequencyMask::EMPTY);

    let mut rng_a = RobotRng::new(99, RobotId(0));
    let mut rng_b = RobotRng::new(99, RobotId(0));
    for _ in 0..8 {
        assert_eq!(
            Jitter.act(RobotId(0), &ctx, &mut rng_a),
            Jitter.act(RobotId(0), &ctx, &mut rng_b)
        );
    }
}
