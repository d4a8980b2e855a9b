//! Tests for tile records and occupancy tagging

#[cfg(test)]
mod tests {
    use cornerstitch::geometry::Rect;
    use cornerstitch::plane::tile::{Occupancy, Tile};

    #[test]
    fn test_occupancy_classification() {
        assert!(Occupancy::Space.is_space());
        assert!(!Occupancy::Space.is_solid());
        assert!(Occupancy::Solid(0).is_solid());
        assert!(!Occupancy::Solid(0).is_space());
    }

    #[test]
    fn test_id_zero_is_a_valid_block() {
        assert_eq!(Occupancy::Solid(0).solid_id(), Some(0));
        assert_eq!(Occupancy::Space.solid_id(), None);
    }

    #[test]
    fn test_display_ids_render_space_as_minus_one() {
        assert_eq!(Occupancy::Space.display_id(), -1);
        assert_eq!(Occupancy::Solid(0).display_id(), 0);
        assert_eq!(Occupancy::Solid(42).display_id(), 42);
    }

    #[test]
    fn test_new_tiles_start_unstitched() {
        let tile = Tile::new(Rect::from_origin_size(0, 0, 5, 5), Occupancy::Space);

        assert!(tile.above.is_none());
        assert!(tile.right.is_none());
        assert!(tile.below.is_none());
        assert!(tile.left.is_none());
    }
}
