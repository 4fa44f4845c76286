//! Cursor over a list or grid of tiles.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    pub index: usize,
}

impl MenuCursor {
    /// Move by `delta` within `0..len`, stopping at the ends.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let max = len - 1;
        self.index = self.index.saturating_add_signed(delta).min(max);
    }

    /// Grid movement: one row is `columns` entries. A move that would leave
    /// the grid is ignored.
    pub fn move_grid(&mut self, dx: isize, dy: isize, columns: usize, len: usize) {
        if len == 0 || columns == 0 {
            return;
        }
        let columns = columns as isize;
        let index = self.index as isize;
        let target = index + dx + dy * columns;
        // Horizontal moves never wrap onto another row.
        let row_ok = target >= 0 && target / columns == index / columns + dy;
        if row_ok && (target as usize) < len {
            self.index = target as usize;
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_by_stops_at_ends() {
        let mut cursor = MenuCursor::default();
        cursor.move_by(-1, 3);
        assert_eq!(cursor.index, 0);
        cursor.move_by(5, 3);
        assert_eq!(cursor.index, 2);
    }

    #[test]
    fn test_move_grid() {
        let mut cursor = MenuCursor::default();
        cursor.move_grid(1, 0, 2, 7);
        assert_eq!(cursor.index, 1);
        // Right edge of the row.
        cursor.move_grid(1, 0, 2, 7);
        assert_eq!(cursor.index, 1);
        cursor.move_grid(0, 1, 2, 7);
        assert_eq!(cursor.index, 3);
        cursor.move_grid(0, 2, 2, 7);
        assert_eq!(cursor.index, 3, "no tile below row 3 col 1");
        cursor.move_grid(-1, 1, 2, 7);
        assert_eq!(cursor.index, 4);
    }
}
