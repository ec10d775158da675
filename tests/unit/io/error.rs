//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use cellgrid::GridError;
    use cellgrid::io::error::{invalid_parameter, out_of_bounds};
    use cellgrid::spatial::position::Position;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::FileSystem {
            path: "/tmp/grid.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(out_of_bounds(Position::ORIGIN, (0, 0)).source().is_none());
    }

    // Tests OutOfBounds message names the position and grid size
    // Verified by omitting dimensions from message
    #[test]
    fn test_out_of_bounds_message() {
        let message = out_of_bounds(Position::new(5, -1), (4, 3)).to_string();

        assert!(message.contains("(5, -1)"));
        assert!(message.contains("4x3"));
    }

    // Tests RaggedRow message reports both widths
    // Verified by swapping expected and found
    #[test]
    fn test_ragged_row_message() {
        let error = GridError::RaggedRow {
            row: 2,
            expected: 5,
            found: 3,
        };

        assert_eq!(
            error.to_string(),
            "Row 2 has 3 cells but the grid is 5 cells wide"
        );
    }

    // Tests InvalidParameter helper fills all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("verbosity", &"loud", &"unknown level");

        let message = error.to_string();
        assert!(message.contains("verbosity"));
        assert!(message.contains("loud"));
        assert!(message.contains("unknown level"));
    }

    // Tests InvalidToken and InvalidRange messages
    // Verified by dropping the token from the message
    #[test]
    fn test_token_and_range_messages() {
        let token = GridError::InvalidToken {
            position: Position::new(1, 0),
            token: "x".to_string(),
            reason: "not an integer".to_string(),
        };
        assert!(token.to_string().contains("'x' at (1, 0)"));

        let range = GridError::InvalidRange {
            start: Position::new(2, 2),
            end: Position::new(1, 1),
        };
        assert!(range.to_string().contains("(2, 2)"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = GridError::ImageExport {
            path: "/tmp/grid.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/grid.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversion from a bare io::Error
    // Verified by mapping into InvalidParameter
    #[test]
    fn test_from_io_error() {
        let error = GridError::from(std::io::Error::other("disk full"));

        assert!(matches!(error, GridError::FileSystem { .. }));
        assert!(error.to_string().contains("disk full"));
    }
}
