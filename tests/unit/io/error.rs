//! Tests for error formatting and conversion

#[cfg(test)]
mod tests {
    use std::error::Error;

    use cornerstitch::PlaneError;
    use cornerstitch::geometry::Point;
    use cornerstitch::io::error::invalid_command;

    #[test]
    fn test_out_of_bounds_names_the_point_and_extent() {
        let error = PlaneError::OutOfBounds {
            point: Point::new(12, 3),
            width: 10,
            height: 10,
        };
        assert_eq!(
            error.to_string(),
            "Point (12, 3) lies outside the 10x10 plane"
        );
    }

    #[test]
    fn test_degenerate_rect_names_the_extent() {
        let error = PlaneError::DegenerateRect {
            width: 0,
            height: 5,
        };
        assert_eq!(error.to_string(), "Degenerate rectangle: 0x5");
    }

    #[test]
    fn test_invalid_command_names_the_line() {
        let error = invalid_command(3, &"expected exactly `P x y`");
        assert_eq!(
            error.to_string(),
            "Invalid command on line 3: expected exactly `P x y`"
        );
    }

    #[test]
    fn test_io_errors_convert_and_expose_their_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: PlaneError = io_error.into();

        assert!(matches!(error, PlaneError::FileSystem { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_plain_errors_have_no_source() {
        let error = PlaneError::DegenerateRect {
            width: 0,
            height: 0,
        };
        assert!(error.source().is_none());
    }
}
