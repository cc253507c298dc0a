//! The [`Grid`] container.

use crate::error::{Axis, GridError};
use gridwork_core::{Direction, Position, Rotation};
use std::fmt;
use std::ops::Index;

/// A rectangular, row-major field of `T` cells addressed by [`Position`].
///
/// Cell `(x, y)` lives in row `y`, column `x`. The grid is never empty and
/// every row has the same length; [`width`](Self::width) and
/// [`height`](Self::height) are read off the row storage rather than kept
/// alongside it.
///
/// # Examples
///
/// ```
/// use gridwork_grid::{Grid, Position};
///
/// let mut grid = Grid::filled(3, 3, '.').unwrap();
/// grid.set(Position::new(1, 1), '#').unwrap();
///
/// assert_eq!(grid.find(|&c| c == '#'), Some(Position::new(1, 1)));
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// assert!(grid.set(Position::new(-1, 0), '#').is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from its rows.
    ///
    /// Returns `Err(GridError::Empty)` when there are no rows or the rows
    /// have no cells, and `Err(GridError::Ragged)` when row lengths differ.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::Ragged {
                row,
                expected,
                actual: r.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Build a `width` x `height` grid by calling `f` for every position in
    /// row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(Position) -> T,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let rows: Vec<Vec<T>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| f(Position::new(x as i64, y as i64)))
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(Self { rows })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn is_valid_position(&self, position: Position) -> bool {
        self.offsets(position).is_some()
    }

    /// Translate a position into `(column, row)` storage offsets.
    #[inline]
    fn offsets(&self, position: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    fn out_of_bounds(&self, position: Position) -> GridError {
        GridError::PositionOutOfBounds {
            position,
            width: self.width(),
            height: self.height(),
        }
    }

    /// The cell at `position`, or `None` when it lies off the grid.
    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        let (x, y) = self.offsets(position)?;
        Some(&self.rows[y][x])
    }

    /// Mutable access to the cell at `position`, or `None` off the grid.
    #[inline]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let (x, y) = self.offsets(position)?;
        Some(&mut self.rows[y][x])
    }

    /// Overwrite the cell at `position`.
    ///
    /// Returns `Err(GridError::PositionOutOfBounds)` when `position` is
    /// off the grid; no cell changes in that case.
    pub fn set(&mut self, position: Position, value: T) -> Result<(), GridError> {
        match self.offsets(position) {
            Some((x, y)) => {
                self.rows[y][x] = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(position)),
        }
    }

    /// Row `y` as a slice, left to right.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// First position, in row-major order, whose cell satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Position> {
        self.iter()
            .find_map(|(position, cell)| predicate(cell).then_some(position))
    }

    /// Every position whose cell satisfies `predicate`, in row-major order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<Position> {
        self.iter()
            .filter_map(|(position, cell)| predicate(cell).then_some(position))
            .collect()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| {
            (0..width).map(move |x| Position::new(x as i64, y as i64))
        })
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x as i64, y as i64), cell))
        })
    }

    /// Build a grid of the same shape by mapping every cell.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect::<Vec<_>>())
                .collect(),
        }
    }

    /// Insert `row` at index `y`, shifting later rows down.
    ///
    /// `y` may equal the current height, which appends. Fails with
    /// `LengthMismatch` when `row.len() != width` and `IndexOutOfBounds`
    /// when `y > height`; the grid is unchanged on failure.
    pub fn insert_row(&mut self, y: usize, row: Vec<T>) -> Result<(), GridError> {
        if row.len() != self.width() {
            return Err(GridError::LengthMismatch {
                axis: Axis::Row,
                expected: self.width(),
                actual: row.len(),
            });
        }
        if y > self.height() {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Row,
                index: y,
                max: self.height(),
            });
        }
        self.rows.insert(y, row);
        Ok(())
    }

    /// Insert `column` at index `x`, shifting later columns right.
    ///
    /// Unlike [`insert_row`](Self::insert_row), `x` must name an existing
    /// column (`x < width`). Fails with `LengthMismatch` when
    /// `column.len() != height`; the grid is unchanged on failure.
    pub fn insert_column(&mut self, x: usize, column: Vec<T>) -> Result<(), GridError> {
        if column.len() != self.height() {
            return Err(GridError::LengthMismatch {
                axis: Axis::Column,
                expected: self.height(),
                actual: column.len(),
            });
        }
        if x >= self.width() {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Column,
                index: x,
                max: self.width() - 1,
            });
        }
        for (row, cell) in self.rows.iter_mut().zip(column) {
            row.insert(x, cell);
        }
        Ok(())
    }
}

impl<T: Clone> Grid<T> {
    /// A `width` x `height` grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows: vec![vec![value; width]; height],
        })
    }

    /// Column `x` copied top to bottom.
    ///
    /// Columns are not contiguous in row-major storage, so this always
    /// allocates; edits to the returned vector do not reach the grid.
    pub fn column(&self, x: usize) -> Option<Vec<T>> {
        if x >= self.width() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[x].clone()).collect())
    }

    /// Iterate over copied columns from left to right.
    pub fn columns(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.width()).filter_map(move |x| self.column(x))
    }

    /// Add `amount` rows or columns of `value` on the edge named by
    /// `direction`.
    ///
    /// `Up` prepends rows, `Down` appends rows, `Left` prepends columns and
    /// `Right` appends columns.
    pub fn expand(&mut self, direction: Direction, amount: usize, value: T) {
        if amount == 0 {
            return;
        }
        let width = self.width();
        match direction {
            Direction::Up => {
                let mut rows: Vec<Vec<T>> =
                    std::iter::repeat_n(vec![value; width], amount).collect();
                rows.append(&mut self.rows);
                self.rows = rows;
            }
            Direction::Down => {
                self.rows
                    .extend(std::iter::repeat_n(vec![value; width], amount));
            }
            Direction::Left => {
                for row in &mut self.rows {
                    let mut widened: Vec<T> =
                        std::iter::repeat_n(value.clone(), amount).collect();
                    widened.append(row);
                    *row = widened;
                }
            }
            Direction::Right => {
                for row in &mut self.rows {
                    row.extend(std::iter::repeat_n(value.clone(), amount));
                }
            }
        }
    }

    /// Rotate the whole grid a quarter turn.
    ///
    /// Width and height swap. The rotated rows are assembled in full before
    /// they replace the current storage.
    pub fn rotate(&mut self, rotation: Rotation) {
        let width = self.width();
        let height = self.height();
        let rotated: Vec<Vec<T>> = match rotation {
            // New row i is old column i read bottom to top.
            Rotation::Clockwise => (0..width)
                .map(|i| {
                    (0..height)
                        .rev()
                        .map(|y| self.rows[y][i].clone())
                        .collect()
                })
                .collect(),
            // New row i is old column (width - 1 - i) read top to bottom.
            Rotation::CounterClockwise => (0..width)
                .map(|i| {
                    self.rows
                        .iter()
                        .map(|row| row[width - 1 - i].clone())
                        .collect()
                })
                .collect(),
        };
        self.rows = rotated;
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when `position` is off the grid; use [`Grid::get`] to probe.
    fn index(&self, position: Position) -> &T {
        match self.get(position) {
            Some(cell) => cell,
            None => panic!("{}", self.out_of_bounds(position)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
