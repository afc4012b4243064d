use crate::point::Point;
use serde::{Deserialize, Serialize};

// Packed tile layout, LSB first: bit 0 flags a resource tile, bit 6 an
// asteroid. Bits 7..6 set mark non-collectable variants, so "valuable"
// requires them clear.
const RESOURCE_BIT: u8 = 0b0000_0001;
const ASTEROID_BIT: u8 = 0b0100_0000;
const BLOCKED_MASK: u8 = 0b1100_0000;

pub fn is_asteroid(tile: u8) -> bool {
    tile & ASTEROID_BIT != 0
}

pub fn is_valuable(tile: u8) -> bool {
    tile & RESOURCE_BIT != 0 && tile & BLOCKED_MASK == 0
}

/// The visible game map as delivered by the environment. Row-major, one
/// packed byte per cell; masked-out cells arrive as plain zeroes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<u8>,
}

impl TileMap {
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as i32;
        assert!(
            rows.iter().all(|r| r.len() as i32 == width),
            "ragged map rows"
        );
        Self {
            width,
            height,
            tiles: rows.into_iter().flatten().collect(),
        }
    }

    pub fn filled(width: i32, height: i32, tile: u8) -> Self {
        assert!(width >= 0 && height >= 0);
        Self {
            width,
            height,
            tiles: vec![tile; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub fn get(&self, p: Point) -> Option<u8> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    pub fn set(&mut self, p: Point, tile: u8) {
        assert!(self.in_bounds(p), "set out of bounds: {}", p);
        self.tiles[(p.y * self.width + p.x) as usize] = tile;
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0, (self.width - 1).max(0)),
            p.y.clamp(0, (self.height - 1).max(0)),
        )
    }
}
