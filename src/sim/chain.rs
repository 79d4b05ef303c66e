//! Ordered chain of balls
//!
//! Balls are stepped and drawn once per tick in chain (index) order. They
//! share nothing but the time scale.

use super::area::PlayArea;
use super::ball::Ball;
use super::vector::Vector2d;
use crate::render::Surface;
use crate::tuning::PhysicsTuning;

#[derive(Debug, Clone)]
pub struct BallChain {
    balls: Vec<Ball>,
}

// Never empty: `new` seeds the first ball and balls are never removed
#[allow(clippy::len_without_is_empty)]
impl BallChain {
    /// A chain always has at least its first ball
    pub fn new(first: Ball) -> Self {
        Self { balls: vec![first] }
    }

    /// Append a ball to the end of the chain. It adopts the chain's time scale.
    pub fn push(&mut self, mut ball: Ball) {
        ball.set_time_scale(self.first().time_scale());
        self.balls.push(ball);
    }

    pub fn first(&self) -> &Ball {
        &self.balls[0]
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    /// Set the time scale on every ball in the chain
    pub fn set_time_scale(&mut self, time_scale: f32) {
        for ball in &mut self.balls {
            ball.set_time_scale(time_scale);
        }
    }

    /// Step every ball once against the same pointer and bounds
    pub fn update_all(&mut self, pointer: Vector2d, area: &impl PlayArea, tuning: &PhysicsTuning) {
        for ball in &mut self.balls {
            ball.step(pointer, area, tuning);
        }
    }

    pub fn draw_all(&self, surface: &mut impl Surface) {
        for ball in &self.balls {
            ball.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use crate::sim::{Arena, BallMetrics};
    use glam::Vec2;

    fn chain_of(n: usize) -> BallChain {
        let metrics = BallMetrics::circle(10.0);
        let mut chain = BallChain::new(Ball::new(metrics, Vector2d::new(50.0, 50.0)));
        for i in 1..n {
            chain.push(Ball::new(
                metrics,
                Vector2d::new(50.0 + 100.0 * i as f32, 50.0),
            ));
        }
        chain
    }

    #[test]
    fn test_set_time_scale_reaches_every_ball() {
        let mut chain = chain_of(3);
        chain.set_time_scale(2.0);
        assert_eq!(chain.len(), 3);
        assert!(chain.iter().all(|b| b.time_scale() == 2.0));
    }

    #[test]
    fn test_push_adopts_chain_time_scale() {
        let mut chain = chain_of(1);
        chain.set_time_scale(0.5);
        chain.push(Ball::new(BallMetrics::circle(10.0), Vector2d::ZERO));
        assert_eq!(chain.get(1).map(|b| b.time_scale()), Some(0.5));
    }

    #[test]
    fn test_update_all_steps_each_ball_once() {
        let arena = Arena::new(400.0, 300.0).unwrap();
        let mut chain = chain_of(3);
        chain.update_all(Vector2d::new(-500.0, -500.0), &arena, &PhysicsTuning::default());
        for ball in chain.iter() {
            assert_eq!(ball.velocity.y, 0.3);
        }
    }

    #[test]
    fn test_balls_do_not_interact() {
        let arena = Arena::new(400.0, 300.0).unwrap();
        let tuning = PhysicsTuning::default();
        let pointer = Vector2d::new(50.0, 55.0);

        let mut chain = chain_of(2);
        let mut lone = chain.first().clone();
        chain.update_all(pointer, &arena, &tuning);
        lone.step(pointer, &arena, &tuning);

        assert_eq!(chain.first().position, lone.position);
        assert_eq!(chain.first().bounce_streak(), 1);
        assert_eq!(chain.get(1).map(|b| b.bounce_streak()), Some(0));
    }

    #[test]
    fn test_draw_all_in_chain_order() {
        let chain = chain_of(3);
        let mut list = DrawList::new();
        chain.draw_all(&mut list);
        assert_eq!(
            list.sprite_positions(),
            vec![
                Vec2::new(40.0, 40.0),
                Vec2::new(140.0, 40.0),
                Vec2::new(240.0, 40.0)
            ]
        );
    }
}
