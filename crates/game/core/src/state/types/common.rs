use std::fmt;

/// Unique identifier for any entity addressable through the entity store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete world position expressed as a map index plus tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub map: u32,
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(map: u32, x: i32, y: i32) -> Self {
        Self { map, x, y }
    }

    /// Returns the adjacent tile in the given direction.
    ///
    /// The y axis grows southwards, matching the tile maps the host uses.
    pub fn facing(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self {
            map: self.map,
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:({}, {})", self.map, self.x, self.y)
    }
}

/// Direction an entity is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    #[default]
    South,
    East,
    West,
}

impl Heading {
    /// Tile offset `(dx, dy)` of the faced tile.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// Wall-clock instant in milliseconds, supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Integer resource meter (health, stamina) tracked per entity.
///
/// Invariant: `current <= maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Returns true if `current` is at least `percent`% of `maximum`.
    pub fn has_percent(&self, percent: u32) -> bool {
        u64::from(self.current) * 100 >= u64::from(self.maximum) * u64::from(percent)
    }

    /// Returns a copy reduced by `amount`, floored at zero.
    #[must_use]
    pub fn depleted_by(self, amount: u32) -> Self {
        Self {
            current: self.current.saturating_sub(amount),
            maximum: self.maximum,
        }
    }
}

/// A tile an entity recently vacated, with the instant it left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub position: Position,
    pub timestamp: Timestamp,
}

impl Footprint {
    pub fn new(position: Position, timestamp: Timestamp) -> Self {
        Self {
            position,
            timestamp,
        }
    }
}
