//! Tests for stitch-mesh point location

#[cfg(test)]
mod tests {
    use cornerstitch::geometry::{Point, Rect};
    use cornerstitch::{Plane, PlaneError, Result};

    #[test]
    fn test_single_tile_plane_locates_every_point() -> Result<()> {
        let plane = Plane::new(5, 4)?;
        for y in 0..4 {
            for x in 0..5 {
                let handle = plane.locate(plane.start(), Point::new(x, y))?;
                assert_eq!(handle, plane.start());
            }
        }
        Ok(())
    }

    #[test]
    fn test_points_outside_the_plane_are_rejected() -> Result<()> {
        let plane = Plane::new(5, 4)?;
        for point in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(5, 0),
            Point::new(0, 4),
        ] {
            assert!(matches!(
                plane.locate(plane.start(), point),
                Err(PlaneError::OutOfBounds { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_each_point_resolves_to_its_unique_containing_tile() -> Result<()> {
        let mut plane = Plane::new(20, 20)?;
        plane.insert_block(Rect::from_origin_size(3, 3, 6, 6), 0)?;
        plane.insert_block(Rect::from_origin_size(11, 10, 4, 7), 1)?;

        for y in 0..20 {
            for x in 0..20 {
                let point = Point::new(x, y);
                let handle = plane.locate(plane.start(), point)?;
                let rect = plane.get(handle)?.rect;
                assert!(rect.contains(point), "{rect:?} does not contain {point:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_location_works_from_any_live_hint() -> Result<()> {
        let mut plane = Plane::new(20, 20)?;
        let block = plane.insert_block(Rect::from_origin_size(14, 14, 4, 4), 0)?;

        // Walk from the far corner block to the opposite corner and back.
        let far = plane.locate(block, Point::new(0, 0))?;
        assert!(plane.get(far)?.occupancy.is_space());
        let back = plane.locate(far, Point::new(15, 15))?;
        assert_eq!(plane.get(back)?.occupancy.display_id(), 0);
        Ok(())
    }

    #[test]
    fn test_stale_hints_are_rejected() -> Result<()> {
        let mut plane = Plane::new(10, 10)?;
        let Some(split) = plane.split_horizontal(plane.start(), 5)? else {
            unreachable!("interior cut must split");
        };
        plane.merge_down(split.upper)?;

        assert!(matches!(
            plane.locate(split.upper, Point::new(1, 1)),
            Err(PlaneError::StaleHandle { .. })
        ));
        Ok(())
    }
}
