//! Per-frame simulation step
//!
//! One call to [`tick`] is one atomic step: bars move, the ball moves and is
//! resolved against the blocker and then the target, the clock runs, and the
//! end condition is checked. Nothing else mutates `GameState`.

use std::time::Duration;

use glam::Vec2;

use super::cannon::Cannonball;
use super::collision::sweep_circle_segment;
use super::geometry::LineSegment;
use super::state::{GameEvent, GamePhase, GameState};

/// Latched input applied at the start of a step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer position, if it changed
    pub aim: Option<Vec2>,
    /// Fire request (ignored while a ball is in flight)
    pub fire: bool,
}

/// How a cannonball's flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShotOutcome {
    Blocked,
    Hit,
    Missed,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    if let Some(pointer) = input.aim {
        state.aim_at(pointer);
    }
    if input.fire {
        state.fire();
    }

    if state.phase == GamePhase::Ready {
        state.phase = GamePhase::Playing;
        log::debug!("First step, game is live");
    }

    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    // Only overflow can fail here; saturate rather than lose the step
    let step = Duration::try_from_secs_f32(dt).unwrap_or(Duration::MAX);

    // Bars first; keep their start-of-step placement for the sweep
    let blocker_from = state.blocker.segment;
    let target_from = state.target.bar.segment;
    state.blocker.update(dt);
    state.target.bar.update(dt);

    if let Some(mut ball) = state.cannonball.take() {
        let from = ball.pos;
        ball.advance(dt);
        match resolve_shot(state, &blocker_from, &target_from, from, &ball) {
            Some(outcome) => log::debug!("Shot {} resolved: {:?}", state.shots_fired, outcome),
            None => state.cannonball = Some(ball),
        }
    }

    state.time_left = state.time_left.saturating_sub(step);
    state.total_elapsed = state.total_elapsed.saturating_add(step);

    if state.target.all_hit() || state.time_left.is_zero() {
        state.finish();
    }
}

/// Check a moving ball against the blocker, then the target, then the screen.
///
/// The blocker always wins a simultaneous contact. A contact with a piece
/// that is already hit is ignored and the ball keeps flying.
fn resolve_shot(
    state: &mut GameState,
    blocker_from: &LineSegment,
    target_from: &LineSegment,
    from: Vec2,
    ball: &Cannonball,
) -> Option<ShotOutcome> {
    let (to, radius) = (ball.pos, ball.radius);
    if sweep_circle_segment(blocker_from, &state.blocker.segment, from, to, radius).is_some() {
        state.time_left = state.time_left.saturating_sub(state.rules.miss_penalty);
        state.blocker.speed_up(state.layout.blocker_speedup);
        state.events.push(GameEvent::BlockerHit);
        return Some(ShotOutcome::Blocked);
    }

    if let Some(hit) = sweep_circle_segment(target_from, &state.target.bar.segment, from, to, radius)
    {
        let piece = state.target.piece_at(hit.offset);
        if state.target.register_hit(piece) {
            state.time_left += state.rules.hit_reward;
            state.target.bar.speed_up(state.layout.target_speedup);
            state.events.push(GameEvent::TargetHit { piece });
            return Some(ShotOutcome::Hit);
        }
    }

    if ball.is_off_screen(state.layout.width, state.layout.height) {
        state.events.push(GameEvent::Missed);
        return Some(ShotOutcome::Missed);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HIT_REWARD, MISS_PENALTY, STARTING_TIME, TARGET_PIECES};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(&Tuning::default(), 800.0, 480.0).unwrap()
    }

    fn dt_duration(dt: f32) -> Duration {
        Duration::try_from_secs_f32(dt).unwrap()
    }

    /// Put a ball just left of the target, level with the middle of `piece`
    fn place_ball_at_piece(state: &mut GameState, piece: usize) {
        let radius = state.layout.ball_radius;
        let seg = state.target.bar.segment;
        let y = seg.point_at((piece as f32 + 0.5) / TARGET_PIECES as f32).y;
        state.cannonball = Some(Cannonball {
            pos: Vec2::new(seg.start.x - radius - 10.0, y),
            vel: Vec2::new(1200.0, 0.0),
            radius,
        });
    }

    #[test]
    fn test_first_tick_starts_play() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_left, STARTING_TIME - dt_duration(DT));
    }

    #[test]
    fn test_fire_twice_in_one_step_launches_once() {
        let mut state = new_state();
        assert!(state.fire());
        tick(&mut state, &TickInput { aim: None, fire: true }, DT);
        assert_eq!(state.shots_fired, 1);
        let fired = state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::CannonFired)
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_blocker_hit_consumes_shot() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        // Aim horizontally: the descending blocker sweeps into the ball's path
        let mut input = TickInput {
            aim: Some(Vec2::new(500.0, 240.0)),
            fire: true,
        };
        let speed_before = state.blocker.speed();
        for _ in 0..60 {
            let before = state.time_left;
            tick(&mut state, &input, DT);
            input = TickInput::default();
            let events = state.drain_events();
            if events.contains(&GameEvent::BlockerHit) {
                assert!(!events.iter().any(|e| matches!(e, GameEvent::TargetHit { .. })));
                assert_eq!(state.time_left, before - MISS_PENALTY - dt_duration(DT));
                assert!(state.blocker.speed() > speed_before);
                assert!(state.cannonball.is_none());
                return;
            }
        }
        panic!("blocker never hit");
    }

    #[test]
    fn test_target_hit_on_piece_three() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        place_ball_at_piece(&mut state, 3);

        let before = state.time_left;
        let target_speed = state.target.bar.speed();
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.drain_events(), vec![GameEvent::TargetHit { piece: 3 }]);
        assert!(state.target.hit_states[3]);
        assert_eq!(state.pieces_hit(), 1);
        assert_eq!(state.time_left, before + HIT_REWARD - dt_duration(DT));
        assert!(state.target.bar.speed() > target_speed);
        assert!(state.cannonball.is_none());
    }

    #[test]
    fn test_repeat_piece_passes_through() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        state.target.register_hit(3);
        place_ball_at_piece(&mut state, 3);

        let before = state.time_left;
        tick(&mut state, &TickInput::default(), DT);

        assert!(state.drain_events().is_empty());
        assert_eq!(state.pieces_hit(), 1);
        assert_eq!(state.time_left, before - dt_duration(DT));
        assert!(state.cannonball.is_some(), "ball keeps flying past a hit piece");
    }

    #[test]
    fn test_seven_hits_win() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        for piece in 0..TARGET_PIECES {
            assert!(!state.is_over());
            place_ball_at_piece(&mut state, piece);
            state.shots_fired += 1;
            tick(&mut state, &TickInput::default(), DT);
            let events = state.drain_events();
            assert_eq!(events[0], GameEvent::TargetHit { piece });
        }
        assert!(state.is_over());
        let report = state.outcome.expect("report");
        assert!(report.win);
        assert_eq!(report.shots_fired, 7);
        assert!(!state.time_left.is_zero());
    }

    #[test]
    fn test_timeout_loses() {
        let mut state = new_state();
        let mut over_at = None;
        for i in 1..=100 {
            tick(&mut state, &TickInput::default(), 0.1);
            let events = state.drain_events();
            if let Some(GameEvent::GameOver(report)) = events.last() {
                assert!(!report.win);
                assert!(over_at.is_none());
                over_at = Some(i);
            }
        }
        assert!(over_at.is_some_and(|step| step <= 100));
        assert_eq!(state.time_left, Duration::ZERO);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_frozen_after_game_over() {
        let mut state = new_state();
        state.finish();
        state.drain_events();
        let blocker = state.blocker;
        tick(&mut state, &TickInput { aim: None, fire: true }, 0.5);
        assert_eq!(state.blocker, blocker);
        assert_eq!(state.shots_fired, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_blocker_penalty_can_end_game() {
        let mut state = new_state();
        state.time_left = Duration::from_millis(500);
        tick(&mut state, &TickInput::default(), DT);
        // Park a ball right against the blocker
        let seg = state.blocker.segment;
        state.cannonball = Some(Cannonball {
            pos: Vec2::new(seg.start.x - 30.0, seg.point_at(0.5).y),
            vel: Vec2::new(1200.0, 0.0),
            radius: state.layout.ball_radius,
        });
        tick(&mut state, &TickInput::default(), DT);
        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::BlockerHit);
        assert!(matches!(events[1], GameEvent::GameOver(r) if !r.win));
        assert_eq!(state.time_left, Duration::ZERO);
    }

    #[test]
    fn test_blocker_wins_over_target_in_same_step() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), DT);
        // Fast enough to cross both x=500 and x=700 in one step, level with
        // a y both bars cover
        let radius = state.layout.ball_radius;
        let from = Vec2::new(500.0 - radius - 5.0, 120.0);
        let ball = Cannonball {
            pos: from,
            vel: Vec2::new(30_000.0, 0.0),
            radius,
        };
        let target_seg = state.target.bar.segment;
        assert!(
            sweep_circle_segment(&target_seg, &target_seg, from, from + ball.vel * DT, radius).is_some(),
            "path reaches the target too"
        );
        state.cannonball = Some(ball);

        let before = state.time_left;
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.drain_events(), vec![GameEvent::BlockerHit]);
        assert_eq!(state.pieces_hit(), 0);
        assert!(state.target.hit_states.iter().all(|hit| !hit));
        assert_eq!(state.time_left, before - MISS_PENALTY - dt_duration(DT));
        assert!(state.cannonball.is_none());
    }

    #[test]
    fn test_huge_dt_uses_up_the_clock() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), 1e30);
        assert_eq!(state.time_left, Duration::ZERO);
        assert_eq!(state.total_elapsed, Duration::MAX);
        assert!(state.is_over());
        let blocker = state.blocker.segment;
        assert!(blocker.top() >= 0.0 && blocker.bottom() <= 480.0);
        assert_eq!(blocker.length(), 120.0);
    }

    proptest! {
        #[test]
        fn prop_each_shot_has_one_outcome(x in -200.0f32..900.0, y in -200.0f32..700.0) {
            let mut state = new_state();
            tick(&mut state, &TickInput { aim: Some(Vec2::new(x, y)), fire: true }, DT);
            let mut outcomes = 0;
            for _ in 0..120 {
                outcomes += state
                    .drain_events()
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BlockerHit | GameEvent::TargetHit { .. } | GameEvent::Missed))
                    .count();
                if state.cannonball.is_none() {
                    break;
                }
                tick(&mut state, &TickInput::default(), DT);
            }
            prop_assert!(state.cannonball.is_none());
            prop_assert_eq!(outcomes, 1);
        }

        #[test]
        fn prop_time_never_negative_and_counts_bounded(
            steps in prop::collection::vec((0.0f32..0.3, any::<bool>(), 0.0f32..800.0, 0.0f32..480.0), 1..200),
        ) {
            let mut state = new_state();
            let mut last_hits = 0;
            for (dt, fire, x, y) in steps {
                tick(&mut state, &TickInput { aim: Some(Vec2::new(x, y)), fire }, dt);
                prop_assert!(state.time_left <= STARTING_TIME + HIT_REWARD * TARGET_PIECES as u32);
                prop_assert!(state.pieces_hit() >= last_hits);
                prop_assert!(state.pieces_hit() - last_hits <= 1);
                prop_assert!(state.pieces_hit() as usize <= TARGET_PIECES);
                last_hits = state.pieces_hit();
                if state.time_left.is_zero() {
                    prop_assert!(state.is_over());
                }
            }
        }
    }
}
