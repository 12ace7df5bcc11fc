// Sparse weight store - rows of hashed columns, absent cells are simply not stored
use ahash::AHashMap;

/// A two-dimensional sparse store indexed by `(row, column)`.
///
/// A cell is either present with a weight or absent. `get` returns `None`
/// for absent cells, so no weight value is reserved as a sentinel.
#[derive(Debug, Clone)]
pub struct SparseMatrix<W> {
    rows: AHashMap<usize, AHashMap<usize, W>>,
    len: usize,
}

impl<W> Default for SparseMatrix<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> SparseMatrix<W> {
    pub fn new() -> Self {
        Self {
            rows: AHashMap::new(),
            len: 0,
        }
    }

    /// Number of present cells
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write a cell, replacing any previous weight
    pub fn set(&mut self, row: usize, col: usize, weight: W) {
        if self.rows.entry(row).or_default().insert(col, weight).is_none() {
            self.len += 1;
        }
    }

    /// Reset a cell to absent, returning the weight it held
    pub fn reset(&mut self, row: usize, col: usize) -> Option<W> {
        let cells = self.rows.get_mut(&row)?;
        let old = cells.remove(&col);
        if old.is_some() {
            self.len -= 1;
        }
        if cells.is_empty() {
            self.rows.remove(&row);
        }
        old
    }

    /// Reset every cell in `row`, returning how many were present
    pub fn clear_row(&mut self, row: usize) -> usize {
        let removed = self.rows.remove(&row).map_or(0, |cells| cells.len());
        self.len -= removed;
        removed
    }

    /// Reset every cell in `col`, returning how many were present
    pub fn clear_column(&mut self, col: usize) -> usize {
        let mut removed = 0;
        self.rows.retain(|_, cells| {
            if cells.remove(&col).is_some() {
                removed += 1;
            }
            !cells.is_empty()
        });
        self.len -= removed;
        removed
    }

    /// Present cells of `row` as `(column, weight)` pairs, in ascending column order
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        let mut cells: Vec<(usize, &W)> = self
            .rows
            .get(&row)
            .into_iter()
            .flat_map(|cells| cells.iter().map(|(col, w)| (*col, w)))
            .collect();
        cells.sort_unstable_by_key(|(col, _)| *col);
        cells.into_iter()
    }
}

impl<W: Copy> SparseMatrix<W> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<W> {
        self.rows.get(&row).and_then(|cells| cells.get(&col)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_overwrite() {
        let mut m = SparseMatrix::new();
        assert_eq!(m.get(0, 1), None);

        m.set(0, 1, 5);
        m.set(0, 1, 7);
        assert_eq!(m.get(0, 1), Some(7));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_reset_absent_cell() {
        let mut m: SparseMatrix<i64> = SparseMatrix::new();
        assert_eq!(m.reset(3, 4), None);

        m.set(3, 4, 1);
        assert_eq!(m.reset(3, 4), Some(1));
        assert_eq!(m.reset(3, 4), None);
        assert!(m.is_empty());
    }

    #[test]
    fn test_clear_row_and_column() {
        let mut m = SparseMatrix::new();
        m.set(0, 1, 1);
        m.set(0, 2, 2);
        m.set(1, 0, 3);
        m.set(2, 0, 4);
        m.set(1, 2, 5);

        assert_eq!(m.clear_row(0), 2);
        assert_eq!(m.clear_column(0), 2);
        assert_eq!(m.clear_row(0), 0);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(1, 2), Some(5));
    }

    #[test]
    fn test_row_is_sorted_by_column() {
        let mut m = SparseMatrix::new();
        for col in [9, 2, 5, 0] {
            m.set(4, col, col as i32 * 10);
        }

        let row: Vec<(usize, i32)> = m.row(4).map(|(c, w)| (c, *w)).collect();
        assert_eq!(row, vec![(0, 0), (2, 20), (5, 50), (9, 90)]);
        assert_eq!(m.row(7).count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = SparseMatrix::new();
        a.set(0, 0, 1.5);
        let mut b = a.clone();
        b.set(0, 0, 2.5);
        b.clear_row(0);

        assert_eq!(a.get(0, 0), Some(1.5));
        assert!(b.is_empty());
    }
}
