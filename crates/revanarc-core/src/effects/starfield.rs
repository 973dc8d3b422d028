//! Procedural star layers.

use rand::Rng;

/// Stars in layer `index` (0-based). Deeper layers are denser.
pub fn star_count(index: usize) -> usize {
    50 + index * 30
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position, percent of the container
    pub x: f64,
    /// Vertical position, percent of the container
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    /// Twinkle animation delay in seconds
    pub delay: f64,
}

impl Star {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(1.0..4.0),
            opacity: rng.random_range(0.2..1.0),
            delay: rng.random_range(0.0..4.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.opacity, self.delay
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    pub index: usize,
    pub stars: Vec<Star>,
}

impl StarLayer {
    pub fn class(&self) -> String {
        format!("star-layer star-layer-{}", self.index + 1)
    }
}

pub fn generate_starfield<R: Rng + ?Sized>(rng: &mut R, layers: usize) -> Vec<StarLayer> {
    (0..layers)
        .map(|index| StarLayer {
            index,
            stars: (0..star_count(index)).map(|_| Star::random(rng)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layer_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        let layers = generate_starfield(&mut rng, 3);
        let counts: Vec<usize> = layers.iter().map(|l| l.stars.len()).collect();
        assert_eq!(counts, vec![50, 80, 110]);
        assert_eq!(layers[2].class(), "star-layer star-layer-3");
    }

    #[test]
    fn stars_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for star in generate_starfield(&mut rng, 3).iter().flat_map(|l| &l.stars) {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..4.0).contains(&star.size));
            assert!((0.2..1.0).contains(&star.opacity));
            assert!((0.0..4.0).contains(&star.delay));
        }
    }
}
