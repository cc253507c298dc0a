use gridwork_grid::{flood_fill, Direction, Grid, GridError, Position, Rotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Cell {
    Dot,
    Hash,
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '.' => Ok(Cell::Dot),
            '#' => Ok(Cell::Hash),
            other => Err(other),
        }
    }
}

#[test]
fn three_by_three_find_and_filter() {
    let mut grid = Grid::<Cell>::parse("...\n...\n...").unwrap();
    grid.set(Position::new(1, 1), Cell::Hash).unwrap();

    assert_eq!(grid.find(|&c| c == Cell::Hash), Some(Position::new(1, 1)));
    let dots = grid.filter(|&c| c == Cell::Dot);
    assert_eq!(
        dots,
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ]
    );
}

#[test]
fn parse_rejects_unknown_cell_with_position() {
    let err = Grid::<Cell>::parse("..\n.x").unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidCell {
            ch: 'x',
            position: Position::new(1, 1)
        }
    );
}

#[test]
fn reshape_then_fill_pipeline() {
    // Grow a 2x2 room by one cell on each side, wall the new border, and
    // flood the interior.
    let mut grid = Grid::<Cell>::parse("..\n..").unwrap();
    for d in Direction::ALL {
        grid.expand(d, 1, Cell::Hash);
    }
    assert_eq!((grid.width(), grid.height()), (4, 4));
    assert_eq!(grid.filter(|&c| c == Cell::Hash).len(), 12);

    let filled = flood_fill(&mut grid, Position::new(1, 1), |&c| c == Cell::Dot, Cell::Hash);
    assert_eq!(filled, 4);
    assert!(grid.iter().all(|(_, &c)| c == Cell::Hash));
}

#[test]
fn rotation_round_trip_on_parsed_grid() {
    let original = Grid::<char>::parse("ab\ncd\nef").unwrap();
    let mut grid = original.clone();
    grid.rotate(Rotation::Clockwise);
    assert_eq!(grid.to_string(), "eca\nfdb");
    grid.rotate(Rotation::CounterClockwise);
    assert_eq!(grid, original);
}

#[test]
fn insert_bounds_follow_append_rules() {
    let mut grid = Grid::<char>::parse("ab\ncd").unwrap();
    grid.insert_row(2, vec!['e', 'f']).unwrap();
    assert_eq!(grid.row(2), Some(&['e', 'f'][..]));
    assert!(matches!(
        grid.insert_row(4, vec!['x', 'x']),
        Err(GridError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        grid.insert_column(2, vec!['x', 'x', 'x']),
        Err(GridError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        grid.insert_column(0, vec!['x']),
        Err(GridError::LengthMismatch { .. })
    ));
}
