//! Zone Classifier
//!
//! Placement facts about where the ball crossed. Middle-row cells are split
//! at their vertical midpoint so a pitch at the top of zone 4 still counts
//! as upper half.

use serde::{Deserialize, Serialize};

use super::{Column, Row, Zone};

/// Vertical split of a middle-row cell (offset units, `<=` is upper)
pub const HALF_SPLIT_Y: f64 = 50.0;

/// Boolean placement facts for a ball location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneFacts {
    pub is_top: bool,
    pub is_middle: bool,
    pub is_bottom: bool,
    pub is_left: bool,
    pub is_center: bool,
    pub is_right: bool,
    pub is_zone5: bool,
    pub is_upper_half: bool,
    pub is_lower_half: bool,
}

impl ZoneFacts {
    pub fn in_row(&self, row: Row) -> bool {
        match row {
            Row::Top => self.is_top,
            Row::Middle => self.is_middle,
            Row::Bottom => self.is_bottom,
        }
    }

    pub fn in_column(&self, column: Column) -> bool {
        match column {
            Column::Left => self.is_left,
            Column::Center => self.is_center,
            Column::Right => self.is_right,
        }
    }
}

/// Classify a ball zone, refining middle-row cells with the vertical offset
/// when it is known.
pub fn classify(ball_zone: Zone, ball_offset_y: Option<f64>) -> ZoneFacts {
    let row = ball_zone.row();
    let column = ball_zone.column();

    // A NaN offset is as good as no offset.
    let offset_y = ball_offset_y.filter(|y| !y.is_nan());

    let (is_upper_half, is_lower_half) = match row {
        Row::Top => (true, false),
        Row::Bottom => (false, true),
        Row::Middle => match offset_y {
            Some(y) => (y <= HALF_SPLIT_Y, y > HALF_SPLIT_Y),
            None => (false, false),
        },
    };

    ZoneFacts {
        is_top: row == Row::Top,
        is_middle: row == Row::Middle,
        is_bottom: row == Row::Bottom,
        is_left: column == Column::Left,
        is_center: column == Column::Center,
        is_right: column == Column::Right,
        is_zone5: ball_zone.is_center(),
        is_upper_half,
        is_lower_half,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(n: i64) -> Zone {
        Zone::new(n).unwrap()
    }

    #[test]
    fn test_rows_and_columns() {
        for z in Zone::ALL {
            let facts = classify(z, None);
            let rows = [facts.is_top, facts.is_middle, facts.is_bottom];
            let cols = [facts.is_left, facts.is_center, facts.is_right];
            assert_eq!(rows.iter().filter(|b| **b).count(), 1, "zone {}", z);
            assert_eq!(cols.iter().filter(|b| **b).count(), 1, "zone {}", z);
            assert!(rows[z.row_index() as usize]);
            assert!(cols[z.col_index() as usize]);
        }
    }

    #[test]
    fn test_zone5_flag() {
        assert!(classify(zone(5), Some(50.0)).is_zone5);
        assert!(!classify(zone(2), Some(50.0)).is_zone5);
        assert!(!classify(zone(8), None).is_zone5);
    }

    #[test]
    fn test_top_and_bottom_ignore_offset() {
        // offsets far outside the cell do not move a top/bottom pitch
        let top = classify(zone(1), Some(95.0));
        assert!(top.is_upper_half && !top.is_lower_half);

        let bottom = classify(zone(9), Some(-20.0));
        assert!(bottom.is_lower_half && !bottom.is_upper_half);
    }

    #[test]
    fn test_middle_row_split() {
        let upper = classify(zone(4), Some(50.0));
        assert!(upper.is_upper_half);
        assert!(!upper.is_lower_half);

        let lower = classify(zone(6), Some(50.5));
        assert!(!lower.is_upper_half);
        assert!(lower.is_lower_half);
    }

    #[test]
    fn test_middle_row_without_offset_is_neither_half() {
        let facts = classify(zone(5), None);
        assert!(!facts.is_upper_half);
        assert!(!facts.is_lower_half);

        let facts = classify(zone(5), Some(f64::NAN));
        assert!(!facts.is_upper_half);
        assert!(!facts.is_lower_half);
    }
}
