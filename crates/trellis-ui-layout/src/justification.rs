//! Cross-axis justification policies

/// Justification along the vertical axis, used by rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalJustification {
    /// Align children to the top edge.
    #[default]
    Top,
    /// Align children to the vertical center.
    Center,
    /// Align children to the bottom edge.
    Bottom,
}

/// Justification along the horizontal axis, used by columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalJustification {
    #[default]
    Left,
    Center,
    Right,
}

/// Axis-agnostic justification, interpreted against the group's cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAxisJustification {
    /// Top for a row, left for a column.
    #[default]
    Start,
    Center,
    /// Bottom for a row, right for a column.
    End,
}

impl CrossAxisJustification {
    /// Offset of a child of extent `child` inside `available` cross-axis space.
    pub fn offset(&self, available: f32, child: f32) -> f32 {
        match self {
            CrossAxisJustification::Start => 0.0,
            CrossAxisJustification::Center => (available - child) / 2.0,
            CrossAxisJustification::End => available - child,
        }
    }
}

impl From<VerticalJustification> for CrossAxisJustification {
    fn from(justification: VerticalJustification) -> Self {
        match justification {
            VerticalJustification::Top => CrossAxisJustification::Start,
            VerticalJustification::Center => CrossAxisJustification::Center,
            VerticalJustification::Bottom => CrossAxisJustification::End,
        }
    }
}

impl From<HorizontalJustification> for CrossAxisJustification {
    fn from(justification: HorizontalJustification) -> Self {
        match justification {
            HorizontalJustification::Left => CrossAxisJustification::Start,
            HorizontalJustification::Center => CrossAxisJustification::Center,
            HorizontalJustification::Right => CrossAxisJustification::End,
        }
    }
}

impl std::str::FromStr for VerticalJustification {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "top" => Ok(VerticalJustification::Top),
            "center" => Ok(VerticalJustification::Center),
            "bottom" => Ok(VerticalJustification::Bottom),
            other => Err(format!("unknown vertical justification `{other}`")),
        }
    }
}

#[cfg(test)]
#[path = "tests/justification_tests.rs"]
mod tests;
