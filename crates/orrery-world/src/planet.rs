#![forbid(unsafe_code)]

//! Planets and their physical parameters.

/// Planetary classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetClass {
    EarthLike,
    RockySuperEarth,
    OceanPlanet,
    DesertPlanet,
    IronPlanet,
    CarbonPlanet,
}

impl PlanetClass {
    pub const ALL: [Self; 6] = [
        Self::EarthLike,
        Self::RockySuperEarth,
        Self::OceanPlanet,
        Self::DesertPlanet,
        Self::IronPlanet,
        Self::CarbonPlanet,
    ];

    /// Mass range for this class, in Earth masses.
    #[must_use]
    pub const fn mass_range(self) -> (f64, f64) {
        match self {
            Self::EarthLike => (0.8, 1.2),
            Self::RockySuperEarth => (1.5, 10.0),
            Self::OceanPlanet => (0.9, 5.0),
            Self::DesertPlanet => (0.5, 1.5),
            Self::IronPlanet => (1.0, 3.0),
            Self::CarbonPlanet => (1.0, 3.0),
        }
    }
}

/// A generated planet.
#[derive(Debug, Clone)]
pub struct Planet {
    pub class: PlanetClass,
    /// Mass in Earth masses.
    pub mass: f64,
    /// Radius in Earth radii.
    pub radius: f64,
    /// Mean density in g/cm³.
    pub density: f64,
    /// Orbital distance from the host star in AU.
    pub orbital_distance: f64,
    /// Surface gravity in m/s².
    pub gravity: f64,
    /// Age in Ga.
    pub age: f64,
}

impl Planet {
    /// Orbital period in Earth years, from Kepler's third law.
    #[must_use]
    pub fn orbital_period(&self) -> f64 {
        self.orbital_distance.powi(3).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_au_orbit_takes_one_year() {
        let planet = Planet {
            class: PlanetClass::EarthLike,
            mass: 1.0,
            radius: 1.0,
            density: 5.5,
            orbital_distance: 1.0,
            gravity: 9.8,
            age: 4.5,
        };
        assert!((planet.orbital_period() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn period_grows_with_distance() {
        let mut planet = Planet {
            class: PlanetClass::OceanPlanet,
            mass: 2.0,
            radius: 1.2,
            density: 4.0,
            orbital_distance: 1.0,
            gravity: 11.0,
            age: 1.0,
        };
        let near = planet.orbital_period();
        planet.orbital_distance = 4.0;
        assert_eq!(planet.orbital_period(), 8.0);
        assert!(planet.orbital_period() > near);
    }
}
