#![forbid(unsafe_code)]

//! Seeded procedural generation of stars, planets, and the tile map.
//!
//! All randomness flows through one explicitly seeded [`SmallRng`], so the
//! same seed reproduces the same world bit-for-bit. Nothing here touches a
//! global generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::map::WorldMap;
use crate::planet::{Planet, PlanetClass};
use crate::star::{Star, StarClass};
use crate::tile::{Rgb, Tile};

const STEFAN_BOLTZMANN: f64 = 5.67e-8; // W/m²/K⁴
const SOLAR_LUMINOSITY_W: f64 = 3.828e26;
const SOLAR_RADIUS_M: f64 = 6.957e8;
const EARTH_MASS_KG: f64 = 5.972e24;
const EARTH_RADIUS_M: f64 = 6.371e6;
const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;
/// Age of the universe in Ga; no star is older.
const UNIVERSE_AGE_GA: f64 = 13.8;

/// World generator with an explicit seed.
#[derive(Debug)]
pub struct Genesis {
    rng: SmallRng,
}

impl Genesis {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Fill a `size × size` map with random glyph tiles, white on black.
    #[must_use]
    pub fn create_map(&mut self, size: u32) -> WorldMap {
        let mut map = WorldMap::new(size);
        for y in 0..size {
            for x in 0..size {
                let glyph = self.rng.gen_range(0..=255u32) as u8;
                map.set_tile(x, y, Tile::new(glyph, Rgb::WHITE, Rgb::BLACK));
            }
        }
        map
    }

    /// Generate a star with one planet in its habitable zone.
    #[must_use]
    pub fn create_star(&mut self) -> Star {
        let class = StarClass::ALL[self.rng.gen_range(0..StarClass::ALL.len())];
        let (min_mass, max_mass) = class.mass_range();
        let mass = self.range(min_mass, max_mass);

        // Main-sequence scaling relations: L = M⁴, R = M^0.8.
        let luminosity = mass.powi(4);
        let radius = mass.powf(0.8);

        // Temperature via Stefan–Boltzmann: L = 4πR²σT⁴.
        let luminosity_w = luminosity * SOLAR_LUMINOSITY_W;
        let radius_m = radius * SOLAR_RADIUS_M;
        let temperature = (luminosity_w
            / (4.0 * std::f64::consts::PI * radius_m.powi(2) * STEFAN_BOLTZMANN))
            .powf(0.25);

        // Lifetime in Ga = 10 / M^2.5.
        let lifetime = 10.0 / mass.powf(2.5);

        // Squaring the uniform draw skews the population toward young stars;
        // a star can be at most 90%-ish through its main sequence.
        let factor = self.range(0.0, 1.0).powi(2);
        let age = (factor * lifetime).min(UNIVERSE_AGE_GA);

        let mut star = Star {
            class,
            mass,
            luminosity,
            radius,
            temperature,
            lifetime,
            age,
            planets: Vec::new(),
        };

        let planet = self.create_planet(&star);
        star.planets.push(planet);
        star
    }

    fn create_planet(&mut self, star: &Star) -> Planet {
        let class = PlanetClass::ALL[self.rng.gen_range(0..PlanetClass::ALL.len())];

        // Habitable-zone edges scale with the square root of luminosity.
        let inner = 0.95 * star.luminosity.sqrt();
        let outer = 1.37 * star.luminosity.sqrt();
        let span = outer - inner;

        let orbital_distance = match class {
            // Desert worlds hug the inner edge.
            PlanetClass::DesertPlanet => inner + 0.1 * span * self.range(0.0, 1.0),
            // Ocean worlds sit in the middle third.
            PlanetClass::OceanPlanet => self.range(inner + span / 3.0, inner + 2.0 * span / 3.0),
            // Earth-likes favor the central half.
            PlanetClass::EarthLike => self.range(inner + 0.25 * span, inner + 0.75 * span),
            _ => self.range(inner, outer),
        };

        let (min_mass, max_mass) = class.mass_range();
        let mass = self.range(min_mass, max_mass);
        let radius = mass.powf(0.3);

        let mass_kg = mass * EARTH_MASS_KG;
        let radius_m = radius * EARTH_RADIUS_M;
        let volume = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
        // kg/m³ → g/cm³.
        let density = (mass_kg / volume) * 0.001;

        let gravity = GRAVITATIONAL_CONSTANT * mass_kg / radius_m.powi(2);

        // Planets form early in the star's life, then can be any age since.
        let min_age = star.age * 0.05;
        let age = self.range(min_age, star.age);

        Planet {
            class,
            mass,
            radius,
            density,
            orbital_distance,
            gravity,
            age,
        }
    }

    #[inline]
    fn range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(0.0..1.0) * (max - min) + min
    }
}
