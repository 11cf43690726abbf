//! Tie-breaking between equally valued columns

/// Distance of a column from the middle column `cols / 2`
pub fn center_distance(column: usize, cols: usize) -> usize {
    column.abs_diff(cols / 2)
}

/// Picks between the current choice and an equally valued candidate
///
/// The candidate only wins if it is strictly closer to the center, so the
/// earlier column is kept on equal distance.
pub fn prefer(current: usize, candidate: usize, cols: usize) -> usize {
    if center_distance(candidate, cols) < center_distance(current, cols) {
        candidate
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_distance() {
        assert_eq!(center_distance(3, 7), 0);
        assert_eq!(center_distance(0, 7), 3);
        assert_eq!(center_distance(6, 7), 3);
        assert_eq!(center_distance(1, 4), 1);
        assert_eq!(center_distance(3, 4), 1);
    }

    #[test]
    fn test_prefer_closer() {
        assert_eq!(prefer(0, 3, 7), 3);
        assert_eq!(prefer(3, 6, 7), 3);
        assert_eq!(prefer(5, 4, 7), 4);
    }

    #[test]
    fn test_prefer_keeps_earlier_on_equal_distance() {
        assert_eq!(prefer(2, 4, 7), 2);
        assert_eq!(prefer(1, 3, 4), 1);
    }
}
