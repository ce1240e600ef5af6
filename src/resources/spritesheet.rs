//! Sprite sheet frame geometry.
//!
//! A sheet is a single image cut into an equally sized grid of frames,
//! indexed row-major (`index = row * columns + column`). The geometry is
//! derived once from the loaded image dimensions and never recomputed.
//! Images that do not match the assumed grid are not rejected; the frames
//! simply come out wrong.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// How a fractional frame size is turned into whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameRounding {
    /// Never overrun into the neighbouring cell.
    #[default]
    Floor,
    Round,
}

impl FrameRounding {
    /// Parse a config value (`floor` or `round`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "floor" => Some(FrameRounding::Floor),
            "round" => Some(FrameRounding::Round),
            _ => None,
        }
    }

    fn divide(self, total: u32, cells: u32) -> u32 {
        match self {
            FrameRounding::Floor => total / cells,
            FrameRounding::Round => (total as f32 / cells as f32).round() as u32,
        }
    }
}

/// Frame layout of one sprite sheet texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub columns: u32,
    pub rows: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SpriteSheet {
    /// Derive frame size from the image size and a `columns` x `rows` grid.
    ///
    /// Zero grid counts are treated as one so the division is always defined.
    pub fn from_image_size(
        image_width: u32,
        image_height: u32,
        columns: u32,
        rows: u32,
        rounding: FrameRounding,
    ) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            frame_width: rounding.divide(image_width, columns),
            frame_height: rounding.divide(image_height, rows),
        }
    }

    pub fn frame_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Top-left pixel of frame `index`.
    pub fn frame_offset(&self, index: usize) -> Vector2 {
        let columns = self.columns as usize;
        let col = index % columns;
        let row = index / columns;
        Vector2 {
            x: (col as u32 * self.frame_width) as f32,
            y: (row as u32 * self.frame_height) as f32,
        }
    }

    /// Sheet indices of one row, left to right.
    pub fn row_frames(&self, row: u32) -> Vec<usize> {
        let start = (row * self.columns) as usize;
        (start..start + self.columns as usize).collect()
    }
}

/// Sprite sheet geometry keyed by texture key.
#[derive(Resource, Default, Debug)]
pub struct SpriteSheetStore {
    pub sheets: FxHashMap<String, SpriteSheet>,
}

impl SpriteSheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tex_key: impl Into<String>, sheet: SpriteSheet) {
        self.sheets.insert(tex_key.into(), sheet);
    }

    pub fn get(&self, tex_key: &str) -> Option<&SpriteSheet> {
        self.sheets.get(tex_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_grid() {
        let sheet = SpriteSheet::from_image_size(768, 1024, 3, 4, FrameRounding::Floor);
        assert_eq!(sheet.frame_width, 256);
        assert_eq!(sheet.frame_height, 256);
        assert_eq!(sheet.frame_count(), 12);
    }

    #[test]
    fn test_floor_drops_remainder() {
        let sheet = SpriteSheet::from_image_size(770, 1023, 3, 4, FrameRounding::Floor);
        assert_eq!(sheet.frame_width, 256);
        assert_eq!(sheet.frame_height, 255);
    }

    #[test]
    fn test_round_to_nearest() {
        let sheet = SpriteSheet::from_image_size(770, 1023, 3, 4, FrameRounding::Round);
        assert_eq!(sheet.frame_width, 257);
        assert_eq!(sheet.frame_height, 256);
    }

    #[test]
    fn test_zero_grid_counts_clamped() {
        let sheet = SpriteSheet::from_image_size(100, 50, 0, 0, FrameRounding::Floor);
        assert_eq!(sheet.columns, 1);
        assert_eq!(sheet.rows, 1);
        assert_eq!(sheet.frame_width, 100);
        assert_eq!(sheet.frame_height, 50);
    }

    #[test]
    fn test_frame_offsets_row_major() {
        let sheet = SpriteSheet::from_image_size(768, 1024, 3, 4, FrameRounding::Floor);
        assert_eq!(sheet.frame_offset(0), Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(sheet.frame_offset(2), Vector2 { x: 512.0, y: 0.0 });
        assert_eq!(sheet.frame_offset(4), Vector2 { x: 256.0, y: 256.0 });
        assert_eq!(sheet.frame_offset(11), Vector2 { x: 512.0, y: 768.0 });
    }

    #[test]
    fn test_row_frames() {
        let sheet = SpriteSheet::from_image_size(768, 1024, 3, 4, FrameRounding::Floor);
        assert_eq!(sheet.row_frames(2), vec![6, 7, 8]);
    }

    #[test]
    fn test_rounding_parse() {
        assert_eq!(FrameRounding::parse("floor"), Some(FrameRounding::Floor));
        assert_eq!(FrameRounding::parse(" Round "), Some(FrameRounding::Round));
        assert_eq!(FrameRounding::parse("ceil"), None);
    }
}
