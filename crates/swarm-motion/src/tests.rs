//! Unit tests for the differential-drive model.

use swarm_core::{RobotId, RobotRng, WheelCommand};

use crate::{DifferentialDrive, MotionError};

fn rng() -> RobotRng {
    RobotRng::new(42, RobotId(0))
}

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn rejects_bad_axle() {
        assert!(matches!(
            DifferentialDrive::new(0.0, 1.0, 0.0),
            Err(MotionError::NonPositiveAxle(_))
        ));
        assert!(matches!(
            DifferentialDrive::new(f32::NAN, 1.0, 0.0),
            Err(MotionError::NonPositiveAxle(_))
        ));
    }

    #[test]
    fn rejects_bad_max_speed() {
        assert!(matches!(
            DifferentialDrive::new(0.5, -1.0, 0.0),
            Err(MotionError::NonPositiveMaxSpeed(_))
        ));
    }

    #[test]
    fn rejects_bad_slip() {
        assert!(matches!(
            DifferentialDrive::new(0.5, 1.0, 1.0),
            Err(MotionError::SlipOutOfRange(_))
        ));
        assert!(matches!(
            DifferentialDrive::new(0.5, 1.0, -0.1),
            Err(MotionError::SlipOutOfRange(_))
        ));
    }
}

#[cfg(test)]
mod kinematics {
    use super::*;

    #[test]
    fn equal_wheels_drive_straight() {
        let drive = DifferentialDrive::exact(0.5, 2.0).unwrap();
        let v = drive.compute(WheelCommand::straight(1.0), &mut rng());
        assert!((v.linear - 1.0).abs() < 1e-6);
        assert_eq!(v.angular, 0.0);
    }

    #[test]
    fn opposite_wheels_spin_in_place() {
        let drive = DifferentialDrive::exact(0.5, 2.0).unwrap();
        let v = drive.compute(WheelCommand::new(-1.0, 1.0), &mut rng());
        assert_eq!(v.linear, 0.0);
        assert!((v.angular - 4.0).abs() < 1e-6); // (1 - (-1)) / 0.5
    }

    #[test]
    fn commands_are_clamped_to_max_speed() {
        let drive = DifferentialDrive::exact(0.5, 1.0).unwrap();
        let v = drive.compute(WheelCommand::straight(100.0), &mut rng());
        assert!((v.linear - 1.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod noise {
    use super::*;

    #[test]
    fn noise_stays_within_slip_bounds() {
        let drive = DifferentialDrive::new(0.5, 2.0, 0.1).unwrap();
        let mut r = rng();
        for _ in 0..256 {
            let v = drive.compute(WheelCommand::straight(1.0), &mut r);
            // Each wheel in [0.9, 1.1], so the mean is too.
            assert!((0.9..=1.1).contains(&v.linear), "linear {} out of bounds", v.linear);
        }
    }

    #[test]
    fn fixed_seed_reproduces_noise() {
        let drive = DifferentialDrive::new(0.5, 2.0, 0.05).unwrap();
        let mut a = rng();
        let mut b = rng();
        for _ in 0..32 {
            let va = drive.compute(WheelCommand::new(0.8, 1.2), &mut a);
            let vb = drive.compute(WheelCommand::new(0.8, 1.2), &mut b);
            assert_eq!(va, vb);
        }
    }

    #[test]
    fn noisy_straight_command_can_turn() {
        // With slip on, equal wheel commands generally produce a small
        // nonzero turn rate — that is the point of the noise.
        let drive = DifferentialDrive::new(0.5, 2.0, 0.1).unwrap();
        let mut r = rng();
        let turned = (0..64)
            .map(|_| drive.compute(WheelCommand::straight(1.0), &mut r))
            .any(|v| v.angular != 0.0);
        assert!(turned);
    }
}
