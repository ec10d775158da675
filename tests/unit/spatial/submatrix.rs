//! Tests for sub-matrix extraction and splicing

#[cfg(test)]
mod tests {
    use cellgrid::GridError;
    use cellgrid::spatial::grid::Grid;
    use cellgrid::spatial::position::Position;

    fn sequential(cols: usize, rows: usize) -> Grid<i64> {
        let mut grid = Grid::new(cols, rows, 0).expect("valid grid");
        for cell in grid.cells_mut() {
            let value = i64::from(cell.y()) * cols as i64 + i64::from(cell.x());
            cell.set_value(value);
        }
        grid
    }

    // Tests extraction re-indexes the rectangle to the origin
    // Verified by keeping source positions in the extracted cells
    #[test]
    fn test_sub_matrix_reindexes() {
        let source = sequential(5, 5);
        let part = source.sub_matrix((1, 1), (2, 2)).expect("valid range");

        assert_eq!(part.dimensions(), (2, 2));
        assert_eq!(part.cell((0, 0)).value(), source.cell((1, 1)).value());
        assert_eq!(*part.cell((1, 1)).value(), 12);
        assert_eq!(part.cell((1, 0)).position(), Position::new(1, 0));
        assert!(!part.cell((2, 0)).is_valid());
    }

    // Tests extraction copies rather than shares cells
    // Verified by mutating the source after extraction
    #[test]
    fn test_sub_matrix_is_independent() {
        let mut source = sequential(3, 3);
        let part = source.sub_matrix((0, 0), (1, 1)).expect("valid range");
        source.set_all(&-1);

        assert_eq!(*part.cell((1, 1)).value(), 4);
    }

    // Tests extraction rejects inverted and out-of-bounds rectangles
    // Verified by clamping the bottom-right corner
    #[test]
    fn test_sub_matrix_errors() {
        let source = sequential(3, 3);

        assert!(matches!(
            source.sub_matrix((2, 2), (1, 1)),
            Err(GridError::InvalidRange { .. })
        ));
        assert!(matches!(
            source.sub_matrix((1, 1), (3, 3)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    // Tests splicing writes the whole source at the offset
    // Verified by writing to source positions instead of offset ones
    #[test]
    fn test_set_sub_matrix_writes_payloads() {
        let mut target = Grid::new(4, 4, 0_i64).expect("valid grid");
        let patch = sequential(2, 2);
        target
            .set_sub_matrix((2, 1), &patch)
            .expect("patch fits");

        assert_eq!(*target.cell((2, 1)).value(), 0);
        assert_eq!(*target.cell((3, 1)).value(), 1);
        assert_eq!(*target.cell((2, 2)).value(), 2);
        assert_eq!(*target.cell((3, 2)).value(), 3);
        assert_eq!(target.cell((3, 2)).position(), Position::new(3, 2));
        assert_eq!(*target.cell((0, 0)).value(), 0);
    }

    // Tests splicing that does not fit leaves the target untouched
    // Verified by writing the in-bounds part before checking corners
    #[test]
    fn test_set_sub_matrix_is_all_or_nothing() {
        let mut target = Grid::new(3, 3, 7_i64).expect("valid grid");
        let patch = sequential(2, 2);

        assert!(matches!(
            target.set_sub_matrix((2, 2), &patch),
            Err(GridError::OutOfBounds { position, .. }) if position == Position::new(3, 3)
        ));
        assert!(matches!(
            target.set_sub_matrix((-1, 0), &patch),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(target.cells().all(|cell| *cell.value() == 7));

        assert!(target.set_sub_matrix((1, 1), &Grid::default()).is_ok());
    }

    // Tests clipped copies drop cells outside the target
    // Verified by erroring on the first out-of-bounds cell
    #[test]
    fn test_set_cells_clips() {
        let mut target = Grid::new(3, 3, 0_i64).expect("valid grid");
        let patch = sequential(2, 2);

        assert_eq!(target.set_cells(&patch, (2, 2)), 1);
        assert_eq!(*target.cell((2, 2)).value(), 0);
        assert_eq!(target.set_cells(&patch, (-1, -1)), 1);
        assert_eq!(*target.cell((0, 0)).value(), 3);
    }

    // Tests stamping merges payloads of another type
    // Verified by overwriting instead of combining
    #[test]
    fn test_stamp_with_combines() {
        let mut counts = Grid::new(3, 1, 1_u32).expect("valid grid");
        let marks = Grid::from_positions(2, 1, &[Position::new(1, 0)], true, false)
            .expect("valid grid");

        let touched = counts.stamp_with(&marks, (1, 0), |count, &mark| {
            if mark {
                *count *= 10;
            }
        });

        assert_eq!(touched, 2);
        let values: Vec<u32> = counts.cells().map(|cell| *cell.value()).collect();
        assert_eq!(values, vec![1, 1, 10]);
    }
}
