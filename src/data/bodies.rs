//! Static catalogue of the Sun and the eight planets.

use crate::foundation::core::Rgba8;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyKind {
    pub const PLANETS: [BodyKind; 8] = [
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
    ];

    pub fn is_inner(self) -> bool {
        matches!(
            self,
            Self::Mercury | Self::Venus | Self::Earth | Self::Mars
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CelestialBody {
    pub kind: BodyKind,
    pub id: &'static str,
    pub name: &'static str,
    /// Reference disc size in design pixels.
    pub radius: f64,
    pub orbit_radius: f64,
    /// Degrees per frame.
    pub rotation_speed: f64,
    pub has_ring: bool,
    pub color: Rgba8,
    pub description: &'static str,
}

const CATALOGUE: [CelestialBody; 9] = [
    CelestialBody {
        kind: BodyKind::Sun,
        id: "sun",
        name: "Sun",
        radius: 150.0,
        orbit_radius: 0.0,
        rotation_speed: 0.2,
        has_ring: false,
        color: Rgba8::rgb(0xFF, 0xD7, 0x00),
        description: "The Sun - Fusion Heart",
    },
    CelestialBody {
        kind: BodyKind::Mercury,
        id: "mercury",
        name: "Mercury",
        radius: 15.0,
        orbit_radius: 200.0,
        rotation_speed: 0.5,
        has_ring: false,
        color: Rgba8::rgb(0x8C, 0x78, 0x53),
        description: "Inner Rocky World",
    },
    CelestialBody {
        kind: BodyKind::Venus,
        id: "venus",
        name: "Venus",
        radius: 20.0,
        orbit_radius: 320.0,
        rotation_speed: 0.3,
        has_ring: false,
        color: Rgba8::rgb(0xFF, 0xC6, 0x49),
        description: "Toxic Greenhouse World",
    },
    CelestialBody {
        kind: BodyKind::Earth,
        id: "earth",
        name: "Earth",
        radius: 22.0,
        orbit_radius: 440.0,
        rotation_speed: 1.0,
        has_ring: false,
        color: Rgba8::rgb(0x6B, 0x93, 0xD6),
        description: "Our Blue Marble",
    },
    CelestialBody {
        kind: BodyKind::Mars,
        id: "mars",
        name: "Mars",
        radius: 18.0,
        orbit_radius: 560.0,
        rotation_speed: 0.8,
        has_ring: false,
        color: Rgba8::rgb(0xFF, 0x6B, 0x6B),
        description: "Red Frontier",
    },
    CelestialBody {
        kind: BodyKind::Jupiter,
        id: "jupiter",
        name: "Jupiter",
        radius: 80.0,
        orbit_radius: 680.0,
        rotation_speed: 0.6,
        has_ring: false,
        color: Rgba8::rgb(0xFF, 0xA7, 0x26),
        description: "Storm Giant",
    },
    CelestialBody {
        kind: BodyKind::Saturn,
        id: "saturn",
        name: "Saturn",
        radius: 70.0,
        orbit_radius: 800.0,
        rotation_speed: 0.5,
        has_ring: true,
        color: Rgba8::rgb(0xFF, 0xCC, 0x80),
        description: "Ringed Marvel",
    },
    CelestialBody {
        kind: BodyKind::Uranus,
        id: "uranus",
        name: "Uranus",
        radius: 40.0,
        orbit_radius: 920.0,
        rotation_speed: 0.4,
        has_ring: true,
        color: Rgba8::rgb(0x80, 0xDE, 0xEA),
        description: "Ice Giant",
    },
    CelestialBody {
        kind: BodyKind::Neptune,
        id: "neptune",
        name: "Neptune",
        radius: 38.0,
        orbit_radius: 1040.0,
        rotation_speed: 0.4,
        has_ring: true,
        color: Rgba8::rgb(0x5C, 0x6B, 0xC0),
        description: "Blue Windy World",
    },
];

/// All bodies, Sun first, planets in orbital order.
pub fn solar_system() -> &'static [CelestialBody] {
    &CATALOGUE
}

pub fn planets() -> &'static [CelestialBody] {
    &CATALOGUE[1..]
}

pub fn body(kind: BodyKind) -> &'static CelestialBody {
    // CATALOGUE is declared in BodyKind order.
    &CATALOGUE[kind as usize]
}

pub fn body_by_id(id: &str) -> Option<&'static CelestialBody> {
    CATALOGUE.iter().find(|b| b.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/data/bodies.rs"]
mod tests;
