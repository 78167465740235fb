use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of entries in the reference colormap.
pub const COLORMAP_SIZE: usize = 256;

static JET_TABLE: OnceLock<Vec<(u8, u8, u8)>> = OnceLock::new();

/// The fixed 256-entry JET colormap as `(r, g, b)` triples.
///
/// This is the piecewise-linear ramp of GNU Octave's `jet`, the same table
/// OpenCV ships as `COLORMAP_JET` and the colormap the source images were
/// rendered with. The table is computed once and shared for the process
/// lifetime.
pub fn jet_colormap() -> &'static [(u8, u8, u8)] {
    let v = JET_TABLE.get_or_init(|| (0..COLORMAP_SIZE).map(|i| jet_entry(i as u8)).collect());
    v.as_slice()
}

fn jet_entry(index: u8) -> (u8, u8, u8) {
    let x = index as f64 / 255.0;
    let r = if x < 3.0 / 8.0 {
        0.0
    } else if x < 5.0 / 8.0 {
        4.0 * x - 1.5
    } else if x < 7.0 / 8.0 {
        1.0
    } else {
        -4.0 * x + 4.5
    };
    let g = if x < 1.0 / 8.0 {
        0.0
    } else if x < 3.0 / 8.0 {
        4.0 * x - 0.5
    } else if x < 5.0 / 8.0 {
        1.0
    } else if x < 7.0 / 8.0 {
        -4.0 * x + 3.5
    } else {
        0.0
    };
    let b = if x < 1.0 / 8.0 {
        4.0 * x + 0.5
    } else if x < 3.0 / 8.0 {
        1.0
    } else if x < 5.0 / 8.0 {
        -4.0 * x + 2.5
    } else {
        0.0
    };
    (quantize(r), quantize(g), quantize(b))
}

fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Inverse colormap: maps a color back to the 8-bit index that produced it.
///
/// Built once per run and shared read-only across workers. Lookup is exact:
/// a color the colormap never emits resolves to `None`, never to a nearest
/// neighbour.
pub struct ColorIndexTable {
    map: HashMap<(u8, u8, u8), u8>,
}

impl ColorIndexTable {
    pub fn from_colormap(colors: &[(u8, u8, u8)]) -> Self {
        let mut map = HashMap::with_capacity(colors.len());
        for (i, &color) in colors.iter().enumerate() {
            map.insert(color, i as u8);
        }
        Self { map }
    }

    /// Inverse of [`jet_colormap`].
    pub fn jet() -> Self {
        Self::from_colormap(jet_colormap())
    }

    /// Index that emitted `color`, or `None` for a color outside the ramp.
    pub fn index_of(&self, color: (u8, u8, u8)) -> Option<u8> {
        self.map.get(&color).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
