//! Intersection engine
//!
//! Pure computation of the overlap between the square and every known band.
//! Nothing here holds state: callers pass the inputs and receive a fresh map.

use crate::domain::band::{Band, BandMap};
use crate::domain::core::{Point, Rect, Size};

/// Overlap of the square with each band, keyed by band
///
/// Holds an entry for every band that had a frame, including bands the
/// square does not touch (those entries are empty rectangles).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionMap {
    overlaps: BandMap<Rect>,
}

impl IntersectionMap {
    pub fn get(&self, band: Band) -> Option<Rect> {
        self.overlaps.get(band).copied()
    }

    /// Number of entries, empty overlaps included
    pub fn len(&self) -> usize {
        self.overlaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlaps.is_empty()
    }

    /// All entries in stacking order, empty overlaps included
    pub fn iter(&self) -> impl Iterator<Item = (Band, Rect)> + '_ {
        self.overlaps.iter().map(|(band, rect)| (band, *rect))
    }

    /// Entries with a non-empty overlap, in stacking order
    pub fn visible(&self) -> impl Iterator<Item = (Band, Rect)> + '_ {
        self.iter().filter(|(_, rect)| !rect.is_empty())
    }

    /// Returns true if the square overlaps `band` with non-zero area
    pub fn is_visible(&self, band: Band) -> bool {
        self.get(band).is_some_and(|rect| !rect.is_empty())
    }
}

/// Computes the overlap of the square with every band in `band_frames`
///
/// The square is the rectangle of `square_size` centered on `square_center`.
/// Bands missing from `band_frames` produce no entry.
pub fn compute_intersections(
    square_center: Point,
    square_size: Size,
    band_frames: &BandMap<Rect>,
) -> IntersectionMap {
    let square_rect = Rect::centered_at(square_center, square_size);

    let overlaps = band_frames
        .iter()
        .map(|(band, frame)| (band, frame.intersection(&square_rect)))
        .collect();

    IntersectionMap { overlaps }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Size = Size {
        width: 100.0,
        height: 100.0,
    };

    /// Four 400x100 bands stacked from y = 0
    fn stacked_frames() -> BandMap<Rect> {
        Band::ALL
            .into_iter()
            .map(|band| (band, Rect::new(0.0, band.index() as f64 * 100.0, 400.0, 100.0)))
            .collect()
    }

    fn single_band(rect: Rect) -> BandMap<Rect> {
        [(Band::White, rect)].into_iter().collect()
    }

    #[test]
    fn containment_case() {
        let frames = single_band(Rect::new(0.0, 0.0, 400.0, 100.0));
        let map = compute_intersections(Point::new(200.0, 50.0), SQUARE, &frames);

        assert_eq!(map.get(Band::White), Some(Rect::new(150.0, 0.0, 100.0, 100.0)));
        assert!(map.is_visible(Band::White));
    }

    #[test]
    fn disjoint_case_is_empty_but_present() {
        let frames = single_band(Rect::new(0.0, 0.0, 400.0, 100.0));
        let map = compute_intersections(Point::new(200.0, 500.0), SQUARE, &frames);

        let overlap = map.get(Band::White).expect("entry for every measured band");
        assert!(overlap.is_empty());
        assert_eq!(map.len(), 1);
        assert_eq!(map.visible().count(), 0);
    }

    #[test]
    fn full_coverage_yields_one_visible_entry() {
        let frames = stacked_frames();
        let frames: BandMap<Rect> = frames
            .iter()
            .map(|(band, rect)| (band, Rect::new(rect.x, rect.y * 2.0, rect.w, 200.0)))
            .collect();

        // Pink spans y in [200, 400); the square spans [250, 350)
        let center = Point::new(200.0, 300.0);
        let map = compute_intersections(center, SQUARE, &frames);

        let visible: Vec<(Band, Rect)> = map.visible().collect();
        assert_eq!(visible, vec![(Band::Pink, Rect::centered_at(center, SQUARE))]);
        assert_eq!(map.len(), Band::COUNT);
    }

    #[test]
    fn boundary_touch_is_empty() {
        let frames = stacked_frames();
        // Square spans y in [100, 200): touches White's bottom edge and Yellow's top edge
        let map = compute_intersections(Point::new(200.0, 150.0), SQUARE, &frames);

        assert!(!map.is_visible(Band::White));
        assert!(!map.is_visible(Band::Yellow));
        assert_eq!(map.get(Band::White).map(|r| r.h), Some(0.0));
        assert_eq!(map.get(Band::Pink), Some(Rect::new(150.0, 100.0, 100.0, 100.0)));
    }

    #[test]
    fn straddling_two_bands_splits_height() {
        let frames = stacked_frames();
        let map = compute_intersections(Point::new(100.0, 200.0), SQUARE, &frames);

        let visible: Vec<(Band, Rect)> = map.visible().collect();
        assert_eq!(
            visible,
            vec![
                (Band::Pink, Rect::new(50.0, 150.0, 100.0, 50.0)),
                (Band::Yellow, Rect::new(50.0, 200.0, 100.0, 50.0)),
            ]
        );
    }

    #[test]
    fn partially_off_screen_clips_width() {
        let frames = stacked_frames();
        let map = compute_intersections(Point::new(-20.0, 50.0), SQUARE, &frames);

        assert_eq!(map.get(Band::White), Some(Rect::new(0.0, 0.0, 30.0, 100.0)));
    }

    #[test]
    fn overlap_dimensions_never_negative() {
        let frames = stacked_frames();
        let centers = [
            Point::new(-1000.0, -1000.0),
            Point::new(200.0, 50.0),
            Point::new(399.0, 401.0),
            Point::new(5000.0, 120.0),
        ];

        for center in centers {
            for (_, rect) in compute_intersections(center, SQUARE, &frames).iter() {
                assert!(rect.w >= 0.0 && rect.h >= 0.0, "{rect:?} at {center:?}");
            }
        }
    }

    #[test]
    fn missing_bands_produce_no_entry() {
        let map = compute_intersections(Point::new(0.0, 0.0), SQUARE, &BandMap::new());
        assert!(map.is_empty());

        let frames = single_band(Rect::new(0.0, 0.0, 10.0, 10.0));
        let map = compute_intersections(Point::new(0.0, 0.0), SQUARE, &frames);
        assert_eq!(map.get(Band::Black), None);
    }

    #[test]
    fn computation_is_deterministic() {
        let frames = stacked_frames();
        for step in 0..50 {
            let center = Point::new(step as f64 * 9.5 - 40.0, step as f64 * 8.25 - 20.0);
            let first = compute_intersections(center, SQUARE, &frames);
            let second = compute_intersections(center, SQUARE, &frames);
            assert_eq!(first, second);
        }
    }
}
