//! Tests for rotations, reflections and transposition

#[cfg(test)]
mod tests {
    use cellgrid::io::render::RenderKind;
    use cellgrid::io::text::TextLayout;
    use cellgrid::spatial::cell::CellValue;
    use cellgrid::spatial::grid::Grid;
    use cellgrid::spatial::position::Position;
    use cellgrid::spatial::transform::Transform;

    const ALL_TRANSFORMS: [Transform; 6] = [
        Transform::RotateClockwise,
        Transform::RotateCounterClockwise,
        Transform::Rotate180,
        Transform::FlipHorizontal,
        Transform::FlipVertical,
        Transform::Transpose,
    ];

    fn grid(lines: &[&str]) -> Grid<CellValue> {
        Grid::from_lines(lines, &TextLayout::characters()).expect("valid grid")
    }

    fn transformed(transform: Transform) -> Vec<String> {
        let mut grid = grid(&["abc", "def"]);
        transform.apply(&mut grid);
        assert!(
            grid.cells()
                .all(|cell| grid.cell(cell.position()).position() == cell.position()),
            "{transform:?} left stale positions"
        );
        grid.debug_lines(RenderKind::Text)
    }

    // Tests each transform against a hand-worked 3x2 layout
    // Verified by swapping the slice directions of the two rotations
    #[test]
    fn test_transforms_on_rectangular_grid() {
        assert_eq!(
            transformed(Transform::RotateClockwise),
            vec!["da", "eb", "fc"]
        );
        assert_eq!(
            transformed(Transform::RotateCounterClockwise),
            vec!["cf", "be", "ad"]
        );
        assert_eq!(transformed(Transform::Rotate180), vec!["fed", "cba"]);
        assert_eq!(transformed(Transform::FlipHorizontal), vec!["cba", "fed"]);
        assert_eq!(transformed(Transform::FlipVertical), vec!["def", "abc"]);
        assert_eq!(transformed(Transform::Transpose), vec!["ad", "be", "cf"]);
    }

    // Tests transpose maps cell (x, y) to (y, x) and swaps dimensions
    // Verified by transposing only the payloads
    #[test]
    fn test_transpose_swaps_coordinates() {
        let original = grid(&["abc", "def"]);
        let mut swapped = original.clone();
        swapped.transpose();

        assert_eq!(swapped.dimensions(), (2, 3));
        for cell in original.cells() {
            let mirrored = swapped.cell((cell.y(), cell.x()));
            assert_eq!(mirrored.value(), cell.value());
            assert_eq!(mirrored.position(), Position::new(cell.y(), cell.x()));
        }
    }

    // Tests four clockwise quarter turns restore the grid exactly
    // Verified by renumbering positions from the source view
    #[test]
    fn test_four_rotations_restore_grid() {
        let original = grid(&["abcd", "efgh", "ijkl"]);
        let mut rotated = original.clone();
        for _ in 0..4 {
            rotated.rotate_clockwise();
        }

        assert_eq!(rotated, original);
    }

    // Tests every transform composed with its inverse is the identity
    // Verified by declaring rotate_180 its own opposite rotation
    #[test]
    fn test_inverse_restores_grid() {
        let original = grid(&["abcd", "efgh", "ijkl"]);
        for transform in ALL_TRANSFORMS {
            let mut restored = original.clone();
            transform.apply(&mut restored);
            transform.inverse().apply(&mut restored);
            assert_eq!(restored, original, "{transform:?} then inverse");
        }
    }

    // Tests reflections applied twice return the original grid
    // Verified by flipping only payloads and not positions
    #[test]
    fn test_double_flips_are_identity() {
        let original = grid(&["abc", "def", "ghi"]);
        let mut flipped = original.clone();
        flipped.flip_horizontal();
        assert_ne!(flipped, original);
        flipped.flip_horizontal();
        assert_eq!(flipped, original);

        flipped.flip_vertical();
        flipped.flip_vertical();
        assert_eq!(flipped, original);
    }

    // Tests row views read the new layout after a transform
    // Verified by caching row views across transforms
    #[test]
    fn test_views_follow_transform() {
        let mut grid = grid(&["ab", "cd"]);
        grid.rotate_counter_clockwise();

        let first: String = grid
            .row(0)
            .map(|row| row.iter().map(|cell| cell.value().text()).collect())
            .unwrap_or_default();
        assert_eq!(first, "bd");
    }

    // Tests the dihedral orientations of asymmetric and symmetric grids
    // Verified by skipping the mirrored candidate
    #[test]
    fn test_orientations() {
        let asymmetric = grid(&["ab", "cd"]);
        let orientations = asymmetric.orientations();
        assert_eq!(orientations.len(), 8);
        assert_eq!(orientations.first(), Some(&asymmetric));

        let uniform = grid(&["xx", "xx"]);
        assert_eq!(uniform.orientations().len(), 1);

        let stripe = grid(&["ab"]);
        assert_eq!(stripe.orientations().len(), 4);
    }

    // Tests transforms of an empty grid keep it empty
    // Verified by forcing a 1x1 store in relocate
    #[test]
    fn test_empty_grid_transforms() {
        let mut empty = Grid::<CellValue>::default();
        for transform in ALL_TRANSFORMS {
            transform.apply(&mut empty);
        }
        assert!(empty.is_empty());
    }
}
