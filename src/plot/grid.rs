//! Row-wrapped arrangement of plot slots

use super::entity::Slot;

/// Immutable description of how slots are laid out on screen
///
/// Rows fill left to right, top to bottom. Every row but the last holds
/// exactly `max_per_row` slots; an empty grid has zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Slot>>,
    max_per_row: usize,
}

impl Grid {
    /// Empty grid; a capacity of zero is treated as one
    pub fn new(max_per_row: usize) -> Self {
        Self {
            rows: Vec::new(),
            max_per_row: max_per_row.max(1),
        }
    }

    /// Pack `slots` in order into rows of `max_per_row`
    pub fn pack(slots: impl IntoIterator<Item = Slot>, max_per_row: usize) -> Self {
        let mut grid = Self::new(max_per_row);
        for slot in slots {
            grid.push(slot);
        }
        grid
    }

    /// Append a slot to the last row, opening a new row when it is full
    pub fn push(&mut self, slot: Slot) {
        match self.rows.last_mut() {
            Some(row) if row.len() < self.max_per_row => row.push(slot),
            _ => self.rows.push(vec![slot]),
        }
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    pub fn max_per_row(&self) -> usize {
        self.max_per_row
    }

    /// All slots in display order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the packing rules hold
    pub fn is_well_packed(&self) -> bool {
        let Some((last, full)) = self.rows.split_last() else {
            return true;
        };
        full.iter().all(|row| row.len() == self.max_per_row)
            && (1..=self.max_per_row).contains(&last.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(range: std::ops::RangeInclusive<usize>) -> Vec<Slot> {
        range.map(|n| Slot::new(n).unwrap()).collect()
    }

    fn raw(grid: &Grid) -> Vec<Vec<usize>> {
        grid.rows()
            .iter()
            .map(|row| row.iter().map(|s| s.get()).collect())
            .collect()
    }

    #[test]
    fn test_pack_wraps_rows() {
        let grid = Grid::pack(slots(1..=5), 4);
        assert_eq!(raw(&grid), vec![vec![1, 2, 3, 4], vec![5]]);
        assert!(grid.is_well_packed());
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn test_push_matches_pack() {
        let mut grid = Grid::new(3);
        for slot in slots(1..=7) {
            grid.push(slot);
        }
        assert_eq!(grid, Grid::pack(slots(1..=7), 3));
        assert_eq!(grid.slots().collect::<Vec<_>>(), slots(1..=7));
    }

    #[test]
    fn test_empty_grid_has_no_rows() {
        let grid = Grid::pack(Vec::new(), 4);
        assert!(grid.is_empty());
        assert!(grid.rows().is_empty());
        assert!(grid.is_well_packed());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let grid = Grid::pack(slots(1..=2), 0);
        assert_eq!(grid.max_per_row(), 1);
        assert_eq!(raw(&grid), vec![vec![1], vec![2]]);
    }
}
