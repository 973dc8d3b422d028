//! Floating particles with a constant population.
//!
//! Each particle rises once and is then replaced by a fresh one with new
//! random parameters, so the field is an endless stream of roughly
//! constant size.

use rand::Rng;

use crate::types::Millis;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    /// Horizontal position in px
    pub x: f64,
    pub size: f64,
    /// Rise duration in seconds
    pub duration: f64,
    /// Start delay in seconds
    pub delay: f64,
    pub born: Millis,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, id: u64, width: f64, now: Millis) -> Self {
        Self {
            id,
            x: if width > 0.0 { rng.random_range(0.0..width) } else { 0.0 },
            size: rng.random_range(2.0..6.0),
            duration: rng.random_range(15.0..25.0),
            delay: rng.random_range(0.0..5.0),
            born: now,
        }
    }

    pub fn expires_at(&self) -> Millis {
        self.born + ((self.duration + self.delay) * 1000.0).round() as Millis
    }

    /// Inline style; particles start just below a viewport of `height`.
    pub fn style(&self, height: f64) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x,
            height + self.size,
            self.size,
            self.size,
            self.duration,
            self.delay
        )
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    target: usize,
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleField {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            particles: Vec::with_capacity(target),
            next_id: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, now: Millis) {
        let particle = Particle::random(rng, self.next_id, width, now);
        self.next_id += 1;
        self.particles.push(particle);
    }

    /// Fill up to the target population.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, now: Millis) {
        while self.particles.len() < self.target {
            self.spawn(rng, width, now);
        }
    }

    /// Remove finished particles and replace each with a new one. Returns
    /// how many were replaced.
    pub fn renew<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, now: Millis) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| p.expires_at() > now);
        let expired = before - self.particles.len();
        for _ in 0..expired {
            self.spawn(rng, width, now);
        }
        expired
    }

    pub fn next_expiry(&self) -> Option<Millis> {
        self.particles.iter().map(Particle::expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn population_is_constant_across_renewals() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(20);
        field.populate(&mut rng, 1280.0, 0);
        assert_eq!(field.len(), 20);

        let mut renewed = 0;
        for t in (0..120_000).step_by(500) {
            renewed += field.renew(&mut rng, 1280.0, t);
            assert_eq!(field.len(), 20);
        }
        // Lifetimes are at most 30s, so everything turned over at least once.
        assert!(renewed >= 20);
    }

    #[test]
    fn replacements_get_fresh_ids() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ParticleField::new(3);
        field.populate(&mut rng, 800.0, 0);
        let first = field.next_expiry().unwrap();
        assert_eq!(field.renew(&mut rng, 800.0, first), 1);
        let ids: Vec<u64> = field.particles().iter().map(|p| p.id).collect();
        assert!(ids.contains(&3));
        assert!(field.particles().iter().any(|p| p.born == first));
    }

    #[test]
    fn lifetime_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(50);
        field.populate(&mut rng, 1000.0, 0);
        for p in field.particles() {
            assert!((15_000..=30_000).contains(&p.expires_at()));
            assert!((0.0..1000.0).contains(&p.x));
        }
    }
}
