//! Band identities and the fixed-size map keyed by them
//!
//! The four bands form a closed set, so per-band data is stored in a plain
//! array indexed by the band rather than in a hash map.

/// One of the four horizontal color strips, listed top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    White,
    Pink,
    Yellow,
    Black,
}

impl Band {
    pub const COUNT: usize = 4;

    /// All bands in stacking order
    pub const ALL: [Band; Band::COUNT] = [Band::White, Band::Pink, Band::Yellow, Band::Black];

    /// Position of the band in the vertical stack (0 = top)
    pub fn index(self) -> usize {
        match self {
            Band::White => 0,
            Band::Pink => 1,
            Band::Yellow => 2,
            Band::Black => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::White => "white",
            Band::Pink => "pink",
            Band::Yellow => "yellow",
            Band::Black => "black",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-band storage where any band may be absent
///
/// `Copy` whenever `T` is, so snapshots are handed out by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandMap<T> {
    slots: [Option<T>; Band::COUNT],
}

impl<T> BandMap<T> {
    pub fn new() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }

    pub fn get(&self, band: Band) -> Option<&T> {
        self.slots[band.index()].as_ref()
    }

    /// Stores `value` for `band`, returning the previous value
    pub fn insert(&mut self, band: Band, value: T) -> Option<T> {
        self.slots[band.index()].replace(value)
    }

    pub fn contains(&self, band: Band) -> bool {
        self.slots[band.index()].is_some()
    }

    /// Number of bands with a value
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once every band has a value
    pub fn is_complete(&self) -> bool {
        self.len() == Band::COUNT
    }

    /// Bands without a value, in stacking order
    pub fn missing(&self) -> Vec<Band> {
        Band::ALL
            .into_iter()
            .filter(|band| !self.contains(*band))
            .collect()
    }

    /// Present entries in stacking order
    pub fn iter(&self) -> impl Iterator<Item = (Band, &T)> + '_ {
        Band::ALL
            .into_iter()
            .filter_map(|band| self.get(band).map(|value| (band, value)))
    }
}

impl<T> Default for BandMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Band, T)> for BandMap<T> {
    fn from_iter<I: IntoIterator<Item = (Band, T)>>(iter: I) -> Self {
        let mut map = BandMap::new();
        for (band, value) in iter {
            map.insert(band, value);
        }
        map
    }
}
