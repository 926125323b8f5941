pub const SPACING_X: f64 = 200.0;
pub const SPACING_Y: f64 = 100.0;

/// Presentation-only coordinate; never read by the evaluators.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Horizontal-centering layout: node `index` of a `width`-node level,
    /// with the whole level centered around x = 0.
    pub fn centered(index: usize, width: usize, level: i64) -> Position {
        Position {
            x: index as f64 * SPACING_X - width as f64 * SPACING_X / 2.0,
            y: level as f64 * SPACING_Y,
        }
    }

    /// The root sits one step above the first generated level.
    pub fn root() -> Position {
        Position {
            x: 0.0,
            y: -SPACING_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn levels_are_centered() {
        let left = Position::centered(0, 2, 0);
        let right = Position::centered(1, 2, 0);
        assert_eq!(left.x, -200.0);
        assert_eq!(right.x, 0.0);
        assert_eq!(right.x - left.x, super::SPACING_X);
        assert_eq!(left.y, 0.0);
    }

    #[test]
    fn deeper_levels_move_down() {
        assert_eq!(Position::centered(0, 1, 2).y, 200.0);
        assert_eq!(Position::root().y, -100.0);
    }
}
