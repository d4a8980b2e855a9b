//! Tests for tile splitting and stitch repair

#[cfg(test)]
mod tests {
    use cornerstitch::geometry::{Point, Rect};
    use cornerstitch::plane::split::HSplit;
    use cornerstitch::{Plane, Result};

    fn split_start_horizontally(plane: &mut Plane, y: i32) -> Result<HSplit> {
        let split = plane.split_horizontal(plane.start(), y)?;
        match split {
            Some(split) => Ok(split),
            None => unreachable!("interior cut must split"),
        }
    }

    #[test]
    fn test_horizontal_split_shrinks_in_place_and_allocates_the_upper_half() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;
        let split = split_start_horizontally(&mut plane, 4)?;

        assert_eq!(split.lower, plane.start());
        assert_eq!(
            plane.get(split.lower)?.rect,
            Rect::from_origin_size(0, 0, 10, 4)
        );
        assert_eq!(
            plane.get(split.upper)?.rect,
            Rect::from_origin_size(0, 4, 10, 6)
        );
        assert_eq!(plane.tile_count(), 2);
        Ok(())
    }

    #[test]
    fn test_horizontal_split_stitches_the_two_halves() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;
        let split = split_start_horizontally(&mut plane, 4)?;

        let lower = plane.get(split.lower)?;
        let upper = plane.get(split.upper)?;
        assert_eq!(lower.above, Some(split.upper));
        assert_eq!(upper.below, Some(split.lower));
        assert!(upper.above.is_none());
        assert!(upper.left.is_none());
        assert!(upper.right.is_none());
        Ok(())
    }

    #[test]
    fn test_cuts_on_or_outside_the_tile_boundary_are_rejected() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;

        assert!(plane.split_horizontal(plane.start(), 0)?.is_none());
        assert!(plane.split_horizontal(plane.start(), 10)?.is_none());
        assert!(plane.split_horizontal(plane.start(), -3)?.is_none());
        assert!(plane.split_vertical(plane.start(), 0)?.is_none());
        assert!(plane.split_vertical(plane.start(), 12)?.is_none());
        assert_eq!(plane.tile_count(), 1);
        Ok(())
    }

    #[test]
    fn test_vertical_split_redirects_the_neighbor_below() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;
        let hsplit = split_start_horizontally(&mut plane, 4)?;

        let Some(vsplit) = plane.split_vertical(hsplit.upper, 6)? else {
            unreachable!("interior cut must split");
        };

        // The full-width tile below anchors its top stitch at its top-right
        // corner, which now borders the new right half.
        let below = plane.get(hsplit.lower)?;
        assert_eq!(below.above, Some(vsplit.right));

        let left = plane.get(vsplit.left)?;
        let right = plane.get(vsplit.right)?;
        assert_eq!(left.right, Some(vsplit.right));
        assert_eq!(right.left, Some(vsplit.left));
        assert_eq!(left.below, Some(hsplit.lower));
        assert_eq!(right.below, Some(hsplit.lower));
        Ok(())
    }

    #[test]
    fn test_split_halves_carry_the_original_occupancy() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;
        let block = plane.insert_block(Rect::from_origin_size(2, 2, 4, 4), 5)?;

        let Some(split) = plane.split_horizontal(block, 4)? else {
            unreachable!("interior cut must split");
        };
        assert_eq!(plane.get(split.upper)?.occupancy.display_id(), 5);
        assert_eq!(plane.get(split.lower)?.occupancy.display_id(), 5);
        Ok(())
    }

    #[test]
    fn test_the_mesh_still_locates_every_point_after_splits() -> Result<()> {
        let mut plane = Plane::new(8, 8)?;
        let hsplit = split_start_horizontally(&mut plane, 3)?;
        plane.split_vertical(hsplit.upper, 5)?;
        plane.split_vertical(hsplit.lower, 2)?;

        for y in 0..8 {
            for x in 0..8 {
                let point = Point::new(x, y);
                let handle = plane.locate(plane.start(), point)?;
                assert!(plane.get(handle)?.rect.contains(point));
            }
        }
        assert_eq!(plane.tile_count(), 4);
        Ok(())
    }
}
