/// Fixed size of the field for the lifetime of a mount.
pub const PARTICLE_COUNT: usize = 80;

/// Particles closer than this get a connecting line.
pub const LINK_DISTANCE: f64 = 120.0;

/// Stroke alpha of a connecting line at distance zero.
pub const LINK_MAX_ALPHA: f64 = 0.2;

const SPEED_SPAN: f64 = 0.5;
const MAX_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Fixed-size set of drifting points with elastic reflection at the viewport
/// edges. Owns no drawing state; the frontend reads positions each frame.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
        }
    }

    /// Populates the field. Guarded on emptiness so a remount reuses the
    /// existing particles instead of stacking a second batch.
    pub fn seed_if_empty(&mut self, rng: &mut fastrand::Rng) {
        if !self.particles.is_empty() {
            return;
        }

        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.f64() * self.width,
                y: rng.f64() * self.height,
                vx: (rng.f64() - 0.5) * SPEED_SPAN,
                vy: (rng.f64() - 0.5) * SPEED_SPAN,
                radius: rng.f64() * MAX_RADIUS,
            })
            .collect();
    }

    /// Tracks a viewport resize. Positions and velocities are deliberately
    /// untouched; anything now outside the new bounds reflects back on the
    /// next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by one frame: move, then flip the velocity
    /// component that crossed a boundary. One frame of overshoot past the
    /// edge is tolerated.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.x < 0.0 || particle.x > self.width {
                particle.vx = -particle.vx;
            }
            if particle.y < 0.0 || particle.y > self.height {
                particle.vy = -particle.vy;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn push_for_test(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}

/// Linear opacity falloff for a connecting line: `LINK_MAX_ALPHA` at zero
/// distance, zero at `LINK_DISTANCE` and beyond.
pub fn link_alpha(distance: f64) -> f64 {
    if distance >= LINK_DISTANCE {
        return 0.0;
    }
    LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_field() -> ParticleField {
        let mut field = ParticleField::new(1_280.0, 720.0);
        let mut rng = fastrand::Rng::with_seed(7);
        field.seed_if_empty(&mut rng);
        field
    }

    #[test]
    fn seeding_fills_the_field_exactly_once() {
        let mut field = seeded_field();
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        let mut rng = fastrand::Rng::with_seed(11);
        field.seed_if_empty(&mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT, "reseed must be a no-op");
    }

    #[test]
    fn particle_count_is_invariant_across_frames_and_resizes() {
        let mut field = seeded_field();
        for frame in 0..500 {
            if frame == 250 {
                field.resize(320.0, 480.0);
            }
            field.step();
            assert_eq!(field.particles().len(), PARTICLE_COUNT);
        }
    }

    #[test]
    fn left_boundary_crossing_inverts_only_the_horizontal_velocity() {
        let mut field = ParticleField::new(800.0, 600.0);
        field.push_for_test(Particle {
            x: 0.0,
            y: 10.0,
            vx: -0.3,
            vy: 0.2,
            radius: 1.0,
        });

        field.step();
        let particle = field.particles()[0];
        assert!(particle.x < 0.0, "one frame of overshoot is expected");
        assert_eq!(particle.vx, 0.3);
        assert_eq!(particle.vy, 0.2, "the other component must be untouched");

        field.step();
        assert!(field.particles()[0].x > particle.x, "position turns around");
    }

    #[test]
    fn bottom_boundary_crossing_inverts_only_the_vertical_velocity() {
        let mut field = ParticleField::new(800.0, 600.0);
        field.push_for_test(Particle {
            x: 400.0,
            y: 599.9,
            vx: 0.1,
            vy: 0.4,
            radius: 1.0,
        });

        field.step();
        let particle = field.particles()[0];
        assert_eq!(particle.vy, -0.4);
        assert_eq!(particle.vx, 0.1);
    }

    #[test]
    fn seeded_particles_start_inside_the_bounds() {
        let field = seeded_field();
        for particle in field.particles() {
            assert!((0.0..=1_280.0).contains(&particle.x));
            assert!((0.0..=720.0).contains(&particle.y));
            assert!(particle.vx.abs() <= SPEED_SPAN / 2.0);
            assert!(particle.vy.abs() <= SPEED_SPAN / 2.0);
            assert!((0.0..MAX_RADIUS).contains(&particle.radius));
        }
    }

    #[test]
    fn link_alpha_is_zero_at_the_cutoff_and_maximal_at_contact() {
        assert_eq!(link_alpha(LINK_DISTANCE), 0.0);
        assert_eq!(link_alpha(LINK_DISTANCE + 40.0), 0.0);
        assert_eq!(link_alpha(0.0), LINK_MAX_ALPHA);
    }

    #[test]
    fn link_alpha_decreases_monotonically_with_distance() {
        let mut previous = link_alpha(0.0);
        let mut distance = 5.0;
        while distance < LINK_DISTANCE {
            let alpha = link_alpha(distance);
            assert!(alpha < previous);
            assert!(alpha > 0.0);
            previous = alpha;
            distance += 5.0;
        }
    }
}
