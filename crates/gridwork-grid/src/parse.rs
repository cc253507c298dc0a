//! Text parsing into typed grids.
//!
//! Puzzle cell types are closed enums implementing `TryFrom<char>`. Parsing
//! validates every character once, at ingestion, so code downstream of
//! [`Grid::parse`] matches on variants instead of re-checking characters.

use crate::error::GridError;
use crate::grid::Grid;
use gridwork_core::Position;

impl<T: TryFrom<char>> Grid<T> {
    /// Parse a block of text, one row per line.
    ///
    /// Leading and trailing whitespace around the block is ignored; every
    /// line must have the same number of characters. A character rejected
    /// by `T::try_from` fails with [`GridError::InvalidCell`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwork_grid::{Grid, Position};
    ///
    /// let grid = Grid::<char>::parse("\n.#\n#.\n").unwrap();
    /// assert_eq!(grid.get(Position::new(1, 0)), Some(&'#'));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows = text
            .trim()
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim_end_matches('\r')
                    .chars()
                    .enumerate()
                    .map(|(x, ch)| {
                        T::try_from(ch).map_err(|_| GridError::InvalidCell {
                            ch,
                            position: Position::new(x as i64, y as i64),
                        })
                    })
                    .collect::<Result<Vec<T>, GridError>>()
            })
            .collect::<Result<Vec<Vec<T>>, GridError>>()?;
        Grid::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Tile {
        Open,
        Wall,
    }

    impl TryFrom<char> for Tile {
        type Error = char;

        fn try_from(ch: char) -> Result<Self, char> {
            match ch {
                '.' => Ok(Self::Open),
                '#' => Ok(Self::Wall),
                other => Err(other),
            }
        }
    }

    #[test]
    fn parses_typed_cells() {
        let grid = Grid::<Tile>::parse("..#\n#..").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(
            grid.filter(|&t| t == Tile::Wall),
            vec![Position::new(2, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn trims_surrounding_blank_lines() {
        let grid = Grid::<char>::parse("\n\nab\ncd\n\n").unwrap();
        assert_eq!(grid.row(0), Some(&['a', 'b'][..]));
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn tolerates_crlf() {
        let grid = Grid::<Tile>::parse(".#\r\n#.\r\n").unwrap();
        assert_eq!(grid.width(), 2);
    }

    #[test]
    fn rejects_unknown_character() {
        let err = Grid::<Tile>::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                ch: 'x',
                position: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn rejects_ragged_and_empty_text() {
        assert!(matches!(
            Grid::<char>::parse("abc\nab"),
            Err(GridError::Ragged { row: 1, .. })
        ));
        assert_eq!(Grid::<char>::parse("  \n "), Err(GridError::Empty));
    }

    #[test]
    fn parsed_grid_satisfies_grid_laws() {
        let grid = Grid::<Tile>::parse("\n..#.\n#...\n..##\n").unwrap();
        compliance::assert_bounds_exact(&grid);
        compliance::assert_positions_complete(&grid);
        compliance::assert_set_is_local(&grid, Tile::Wall);
        compliance::assert_rotation_round_trip(&grid);
        compliance::assert_expand_shapes(&grid, Tile::Open);
    }
}
