//! Per-frame simulation step
//!
//! Advances the ball and every ring by the frame delta and evaluates the
//! escape / timeout conditions.

use super::state::{Outcome, Simulation};

impl Simulation {
    /// Advance the simulation by one frame of `dt` seconds
    ///
    /// Once the run is terminal this returns the stored outcome and touches
    /// nothing. Zero or negative `dt` is accepted as-is.
    pub fn step(&mut self, dt: f32) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        self.ball.integrate(dt);

        // Every ring rotates and is tested, innermost first, even if an
        // earlier ring already bounced the ball this frame
        for ring in &mut self.rings {
            ring.advance(dt);
            if ring.resolve_collision(&mut self.ball) {
                self.bounces += 1;
            }
        }

        self.elapsed += f64::from(dt);

        let escaped = self.ball.distance_from_center() > self.escape_radius();
        let expired = self.elapsed >= f64::from(self.config.duration_secs);
        self.outcome = self.resolve_outcome(escaped, expired);

        match self.outcome {
            Outcome::Won => log::info!(
                "Ball escaped after {:.2}s ({} bounces)",
                self.elapsed,
                self.bounces
            ),
            Outcome::Lost => log::info!(
                "Time ran out at {:.2}s, ball at distance {:.1} ({} bounces)",
                self.elapsed,
                self.ball.distance_from_center(),
                self.bounces
            ),
            Outcome::Running => {}
        }

        self.outcome
    }
}
