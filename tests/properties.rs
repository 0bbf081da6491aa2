//! Property tests for phase-state arithmetic and the driven pin pattern.

mod common;

use core::time::Duration;

use proptest::prelude::*;
use soft_stepper::{Direction, StepperEngine, COMMUTATION};

use common::{FakeGpio, FakePin, RecordingDelay, ENABLE, PHASES};

fn engine(gpio: &mut FakeGpio) -> StepperEngine<FakePin, RecordingDelay> {
    StepperEngine::new(gpio, ENABLE, PHASES, Duration::ZERO, RecordingDelay::default())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

proptest! {
    #[test]
    fn forward_cycle_has_period_four(k in 0u32..64) {
        let mut gpio = FakeGpio::new();
        let mut stepper = engine(&mut gpio);

        for _ in 0..4 * k {
            stepper.step_forward();
        }

        prop_assert_eq!(stepper.phase_state().index(), 0);
        prop_assert_eq!(gpio.levels(PHASES), COMMUTATION[0]);
    }

    #[test]
    fn forward_then_backward_round_trips(start in 0i32..64) {
        let mut gpio = FakeGpio::new();
        let mut stepper = engine(&mut gpio);
        stepper.step_forward_multi(start);

        let state = stepper.phase_state();
        let pattern = gpio.levels(PHASES);

        stepper.step_forward();
        stepper.step_backward();

        prop_assert_eq!(stepper.phase_state(), state);
        prop_assert_eq!(gpio.levels(PHASES), pattern);
    }

    #[test]
    fn backward_multi_then_forward_multi_is_identity(start in 0i32..8, n in 0i32..200) {
        let mut gpio = FakeGpio::new();
        let mut stepper = engine(&mut gpio);
        stepper.step_backward_multi(start);
        let state = stepper.phase_state();
        let position = stepper.position();

        stepper.step_backward_multi(n);
        stepper.step_forward_multi(n);

        prop_assert_eq!(stepper.phase_state(), state);
        prop_assert_eq!(stepper.position(), position);
    }

    #[test]
    fn driven_pattern_always_matches_phase_state(
        moves in prop::collection::vec((direction(), -3i32..12), 0..32)
    ) {
        let mut gpio = FakeGpio::new();
        let mut stepper = engine(&mut gpio);
        let mut expected: i64 = 0;

        for (direction, count) in moves {
            stepper.step(direction, count);
            if count > 0 {
                expected += direction.sign() * i64::from(count);
            }

            let index = usize::from(stepper.phase_state().index());
            prop_assert!(index < 4);
            prop_assert_eq!(gpio.levels(PHASES), COMMUTATION[index]);
            prop_assert_eq!(i64::from(stepper.phase_state().index()), expected.rem_euclid(4));
        }

        prop_assert_eq!(stepper.position(), expected);
    }
}
