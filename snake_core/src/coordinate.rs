use std::fmt;

use crate::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    pub fn flipped(&self, width: i32, height: i32) -> Self {
        Self {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate{{x={}, y={}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_translated_follows_direction_vector() {
        let coordinate = Coordinate::new(3, 4);
        assert_eq!(coordinate.translated(Direction::Left), Coordinate::new(2, 4));
        assert_eq!(coordinate.translated(Direction::Right), Coordinate::new(4, 4));
        assert_eq!(coordinate.translated(Direction::Up), Coordinate::new(3, 3));
        assert_eq!(coordinate.translated(Direction::Down), Coordinate::new(3, 5));
    }

    #[test]
    fn test_translated_does_not_clamp_to_bounds() {
        assert_eq!(
            Coordinate::new(0, 0).translated(Direction::Left),
            Coordinate::new(-1, 0)
        );
        assert_eq!(
            Coordinate::new(0, 0).translated(Direction::Up),
            Coordinate::new(0, -1)
        );
    }

    #[test]
    fn test_translated_wraps_at_integer_bounds() {
        assert_eq!(
            Coordinate::new(i32::MAX, 0).translated(Direction::Right),
            Coordinate::new(i32::MIN, 0)
        );
        assert_eq!(
            Coordinate::new(i32::MIN, 0).translated(Direction::Left),
            Coordinate::new(i32::MAX, 0)
        );
        assert_eq!(
            Coordinate::new(0, i32::MAX).translated(Direction::Down),
            Coordinate::new(0, i32::MIN)
        );
        assert_eq!(
            Coordinate::new(0, i32::MIN).translated(Direction::Up),
            Coordinate::new(0, i32::MAX)
        );
    }

    #[test]
    fn test_flipped_keeps_in_range_coordinates() {
        assert_eq!(Coordinate::new(3, 2).flipped(10, 5), Coordinate::new(3, 2));
        assert_eq!(Coordinate::new(0, 0).flipped(10, 5), Coordinate::new(0, 0));
        assert_eq!(Coordinate::new(9, 4).flipped(10, 5), Coordinate::new(9, 4));
    }

    #[test]
    fn test_flipped_wraps_one_step_overshoot() {
        assert_eq!(Coordinate::new(-1, 0).flipped(10, 5), Coordinate::new(9, 0));
        assert_eq!(Coordinate::new(10, 0).flipped(10, 5), Coordinate::new(0, 0));
        assert_eq!(Coordinate::new(0, -1).flipped(10, 5), Coordinate::new(0, 4));
        assert_eq!(Coordinate::new(0, 5).flipped(10, 5), Coordinate::new(0, 0));
        assert_eq!(Coordinate::new(10, 5).flipped(10, 5), Coordinate::new(0, 0));
    }

    #[test]
    fn test_translate_then_flip_wraps_one_cell() {
        // 10x5 field: stepping over an edge re-enters from the other side.
        assert_eq!(
            Coordinate::new(0, 0).translated(Direction::Left).flipped(10, 5),
            Coordinate::new(9, 0)
        );
        assert_eq!(
            Coordinate::new(9, 4).translated(Direction::Down).flipped(10, 5),
            Coordinate::new(9, 0)
        );
        assert_eq!(
            Coordinate::new(4, 2).translated(Direction::Right).flipped(10, 5),
            Coordinate::new(5, 2)
        );
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Coordinate::new(1, 2), Coordinate::new(1, 2));
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Coordinate::new(7, 5).to_string(), "Coordinate{x=7, y=5}");
        assert_eq!(Coordinate::new(-1, 0).to_string(), "Coordinate{x=-1, y=0}");
    }

    proptest! {
        #[test]
        fn prop_flipped_lands_in_range(
            x in any::<i32>(),
            y in any::<i32>(),
            width in 1i32..=100,
            height in 1i32..=100,
        ) {
            let flipped = Coordinate::new(x, y).flipped(width, height);
            prop_assert!((0..width).contains(&flipped.x));
            prop_assert!((0..height).contains(&flipped.y));
        }
    }

    proptest! {
        #[test]
        fn prop_flipped_is_idempotent(
            x in any::<i32>(),
            y in any::<i32>(),
            width in 1i32..=100,
            height in 1i32..=100,
        ) {
            let once = Coordinate::new(x, y).flipped(width, height);
            prop_assert_eq!(once.flipped(width, height), once);
        }
    }
}
