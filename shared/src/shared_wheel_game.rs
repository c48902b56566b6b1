use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

pub const WHEEL_SEGMENTS: usize = 8;
pub const SEGMENT_RADIANS: f64 = PI / 4.0;

// Trajectory y = a·x² + b·x + c, sampled every X_STEP.
pub const X_STEP: f64 = 0.1;
pub const TRAJECTORY_C: f64 = 0.1;
const A_RANGE: std::ops::Range<i32> = 20..80;
const A_SCALE: f64 = 10_000.0;
const B_RANGE: std::ops::Range<i32> = 20..30;
const B_SCALE: f64 = 100.0;

/// What a sector does to the player who lands on it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelSector {
    Cash(i32),
    Bankrupt,
    LoseTurn,
}

/// Prize table indexed by landed sector.
pub const SECTORS: [WheelSector; WHEEL_SEGMENTS] = [
    WheelSector::Cash(200),
    WheelSector::Bankrupt,
    WheelSector::Cash(50),
    WheelSector::Cash(100),
    WheelSector::Cash(200),
    WheelSector::LoseTurn,
    WheelSector::Cash(50),
    WheelSector::Cash(100),
];

pub fn sector_outcome(sector: usize) -> Option<WheelSector> {
    SECTORS.get(sector).copied()
}

impl WheelSector {
    pub fn label(&self) -> String {
        match self {
            WheelSector::Cash(amount) => format!("£{}", amount),
            WheelSector::Bankrupt => "Bankrupt".to_string(),
            WheelSector::LoseTurn => "Lose a turn".to_string(),
        }
    }
}

/// One spin of the wheel.
///
/// Each tick yields the next angular increment (in degrees) from a downward
/// quadratic that starts at `c > 0` and eventually crosses zero, so the wheel
/// always decelerates and always stops. The accumulated rotation stays in
/// `[0, 2π)` and maps onto one of the eight π/4 sectors.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinEngine {
    a: f64,
    b: f64,
    c: f64,
    x: f64,
    rotation: f64,
    landed_sector: usize,
    ticks: u32,
    finished: bool,
}

impl SpinEngine {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::resume_from(0.0, rng)
    }

    /// A new trajectory for a wheel already resting at `rotation` radians.
    pub fn resume_from<R: Rng + ?Sized>(rotation: f64, rng: &mut R) -> Self {
        let a = -(f64::from(rng.gen_range(A_RANGE)) / A_SCALE);
        let b = f64::from(rng.gen_range(B_RANGE)) / B_SCALE;
        Self::from_coefficients(a, b).starting_at(rotation)
    }

    pub fn from_coefficients(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            c: TRAJECTORY_C,
            x: 0.0,
            rotation: 0.0,
            landed_sector: 0,
            ticks: 0,
            finished: false,
        }
    }

    fn starting_at(mut self, rotation: f64) -> Self {
        self.rotation = rotation.rem_euclid(TAU);
        self.landed_sector = Self::sector_for(self.rotation);
        self
    }

    /// Next increment in degrees, or 0 once the trajectory has gone negative.
    pub fn step(&mut self) -> f64 {
        let y = self.a * self.x * self.x + self.b * self.x + self.c;
        if y >= 0.0 {
            self.x += X_STEP;
            self.ticks += 1;
            return y;
        }
        self.finished = true;
        0.0
    }

    pub fn apply_rotation(&mut self, degrees: f64) {
        self.rotation = (self.rotation + degrees.to_radians()).rem_euclid(TAU);
        self.landed_sector = Self::sector_for(self.rotation);
    }

    fn sector_for(rotation: f64) -> usize {
        (rotation / SEGMENT_RADIANS).floor() as usize % WHEEL_SEGMENTS
    }

    /// Drives the wheel until it stops and returns the landed sector.
    pub fn spin_to_rest(&mut self) -> usize {
        loop {
            let increment = self.step();
            if increment == 0.0 {
                break;
            }
            self.apply_rotation(increment);
        }
        log::debug!(
            "Wheel stopped on sector {} after {} ticks",
            self.landed_sector,
            self.ticks
        );
        self.landed_sector
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn landed_sector(&self) -> usize {
        self.landed_sector
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prize_table() {
        for sector in [2, 6] {
            assert_eq!(sector_outcome(sector), Some(WheelSector::Cash(50)));
        }
        for sector in [3, 7] {
            assert_eq!(sector_outcome(sector), Some(WheelSector::Cash(100)));
        }
        for sector in [0, 4] {
            assert_eq!(sector_outcome(sector), Some(WheelSector::Cash(200)));
        }
        assert_eq!(sector_outcome(1), Some(WheelSector::Bankrupt));
        assert_eq!(sector_outcome(5), Some(WheelSector::LoseTurn));
        assert_eq!(sector_outcome(8), None);

        let bankrupts = SECTORS.iter().filter(|s| **s == WheelSector::Bankrupt).count();
        let skips = SECTORS.iter().filter(|s| **s == WheelSector::LoseTurn).count();
        assert_eq!((bankrupts, skips), (1, 1));
    }

    #[test]
    fn test_coefficients_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let engine = SpinEngine::new(&mut rng);
            assert!(engine.a <= -0.002 && engine.a >= -0.0079 - 1e-12);
            assert!(engine.b >= 0.2 && engine.b <= 0.29 + 1e-12);
            assert_eq!(engine.c, TRAJECTORY_C);
        }
    }

    #[test]
    fn test_first_step_is_c() {
        let mut engine = SpinEngine::from_coefficients(-0.005, 0.25);
        assert!((engine.step() - TRAJECTORY_C).abs() < 1e-12);
    }

    #[test]
    fn test_step_sequence_terminates_with_single_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut engine = SpinEngine::new(&mut rng);
            let mut values = Vec::new();
            loop {
                let y = engine.step();
                values.push(y);
                if y == 0.0 {
                    break;
                }
                assert!(values.len() < 10_000, "trajectory never crossed zero");
            }
            let zeros = values.iter().filter(|v| **v == 0.0).count();
            assert_eq!(zeros, 1);
            assert!(values.iter().all(|v| *v >= 0.0));
            assert!(engine.is_finished());
        }
    }

    #[test]
    fn test_step_does_not_advance_after_finishing() {
        let mut engine = SpinEngine::from_coefficients(-0.0079, 0.2);
        engine.spin_to_rest();
        let ticks = engine.ticks();
        assert_eq!(engine.step(), 0.0);
        assert_eq!(engine.step(), 0.0);
        assert_eq!(engine.ticks(), ticks);
    }

    #[test]
    fn test_rotation_wraps_and_sector_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut engine = SpinEngine::new(&mut rng);
            loop {
                let y = engine.step();
                if y == 0.0 {
                    break;
                }
                engine.apply_rotation(y);
                assert!(engine.rotation() >= 0.0 && engine.rotation() < TAU);
                assert!(engine.landed_sector() < WHEEL_SEGMENTS);
            }
        }
    }

    #[test]
    fn test_sector_boundaries() {
        let mut engine = SpinEngine::from_coefficients(-0.005, 0.25);
        engine.apply_rotation(44.9);
        assert_eq!(engine.landed_sector(), 0);
        engine.apply_rotation(0.2);
        assert_eq!(engine.landed_sector(), 1);
        engine.apply_rotation(270.0);
        assert_eq!(engine.landed_sector(), 7);
        engine.apply_rotation(45.0);
        assert_eq!(engine.landed_sector(), 0);
    }

    #[test]
    fn test_full_turn_wraps_to_start() {
        let mut engine = SpinEngine::from_coefficients(-0.005, 0.25);
        engine.apply_rotation(100.0);
        let before = engine.rotation();
        engine.apply_rotation(360.0);
        assert!((engine.rotation() - before).abs() < 1e-9);
    }

    #[test]
    fn test_resume_keeps_resting_angle() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut first = SpinEngine::new(&mut rng);
        let sector = first.spin_to_rest();
        let second = SpinEngine::resume_from(first.rotation(), &mut rng);
        assert_eq!(second.rotation(), first.rotation());
        assert_eq!(second.landed_sector(), sector);
    }

    #[test]
    fn test_same_seed_same_sector() {
        let sector = |seed| SpinEngine::new(&mut StdRng::seed_from_u64(seed)).spin_to_rest();
        assert_eq!(sector(99), sector(99));
    }
}
