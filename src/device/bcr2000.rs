//! Behringer BCR2000 control layout
//!
//! CC numbers of the preset layout used with BC-Manager. Groups and rows
//! only name controls; they have no effect on lookup.

use std::fmt;

use crate::mapping::ControlId;

/// Physical corner of the four buttons at the right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn label(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        }
    }
}

/// Where a control sits on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Top push-encoders, one group per encoder-group button
    EncoderGroup(u8),
    /// Encoder rows of the main section
    EncoderRow(u8),
    /// Button rows under the top encoders
    ButtonRow(u8),
    Corner(Corner),
}

/// A named control on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlElement {
    pub id: ControlId,
    pub section: Section,
    /// 1-based position within the section
    pub position: u8,
}

impl ControlElement {
    /// Name in the style `encoder1_group1`, `button3_row2`, `button_top_left`
    pub fn name(&self) -> String {
        match self.section {
            Section::EncoderGroup(group) => format!("encoder{}_group{}", self.position, group),
            Section::EncoderRow(row) => format!("encoder{}_row{}", self.position, row),
            Section::ButtonRow(row) => format!("button{}_row{}", self.position, row),
            Section::Corner(corner) => format!("button_{}", corner.label()),
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self.section, Section::ButtonRow(_) | Section::Corner(_))
    }
}

impl fmt::Display for ControlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

struct Run {
    first: u8,
    count: u8,
    section: Section,
}

impl Run {
    const fn new(first: u8, count: u8, section: Section) -> Self {
        Self {
            first,
            count,
            section,
        }
    }
}

const RUNS: &[Run] = &[
    Run::new(0, 8, Section::EncoderGroup(1)),
    Run::new(8, 8, Section::EncoderGroup(2)),
    Run::new(16, 8, Section::EncoderRow(1)),
    Run::new(24, 8, Section::EncoderRow(2)),
    Run::new(64, 8, Section::EncoderRow(3)),
    Run::new(72, 8, Section::ButtonRow(1)),
    Run::new(80, 7, Section::ButtonRow(2)),
];

const CORNERS: [(u8, Corner); 4] = [
    (127, Corner::TopLeft),
    (126, Corner::TopRight),
    (125, Corner::BottomLeft),
    (124, Corner::BottomRight),
];

/// Encoder `position` (1-8) of encoder group `group` (1-2)
pub(crate) const fn group_encoder(group: u8, position: u8) -> ControlId {
    assert!(group >= 1 && group <= 2 && position >= 1 && position <= 8);
    ControlId::from_const((group - 1) * 8 + position - 1)
}

/// Button `position` of button row `row` (1-2); row 2 has seven buttons
pub(crate) const fn button(row: u8, position: u8) -> ControlId {
    let (first, count) = if row == 1 { (72, 8) } else { (80, 7) };
    assert!(row >= 1 && row <= 2 && position >= 1 && position <= count);
    ControlId::from_const(first + position - 1)
}

/// Describe a control id, `None` if the layout does not use it
pub fn element(id: ControlId) -> Option<ControlElement> {
    let raw = id.get();

    if let Some(run) = RUNS
        .iter()
        .find(|run| raw >= run.first && raw < run.first + run.count)
    {
        return Some(ControlElement {
            id,
            section: run.section,
            position: raw - run.first + 1,
        });
    }

    CORNERS
        .iter()
        .find(|(corner_id, _)| *corner_id == raw)
        .map(|&(_, corner)| ControlElement {
            id,
            section: Section::Corner(corner),
            position: 1,
        })
}

/// All controls of the layout in ascending id order
pub fn elements() -> impl Iterator<Item = ControlElement> {
    (0..=127u8)
        .filter_map(ControlId::new)
        .filter_map(element)
}

/// Find a control by name (case-insensitive)
pub fn find(name: &str) -> Option<ControlId> {
    let name = name.trim().to_ascii_lowercase();
    elements().find(|e| e.name() == name).map(|e| e.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u8) -> ControlId {
        ControlId::new(raw).unwrap()
    }

    #[test]
    fn test_element_names() {
        assert_eq!(element(id(0)).unwrap().name(), "encoder1_group1");
        assert_eq!(element(id(15)).unwrap().name(), "encoder8_group2");
        assert_eq!(element(id(64)).unwrap().name(), "encoder1_row3");
        assert_eq!(element(id(72)).unwrap().name(), "button1_row1");
        assert_eq!(element(id(86)).unwrap().name(), "button7_row2");
        assert_eq!(element(id(124)).unwrap().name(), "button_bottom_right");
    }

    #[test]
    fn test_unused_ids_have_no_element() {
        assert!(element(id(32)).is_none());
        assert!(element(id(87)).is_none());
        assert!(element(id(100)).is_none());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("encoder1_group1"), Some(id(0)));
        assert_eq!(find("BUTTON1_ROW1"), Some(id(72)));
        assert_eq!(find("button_top_left"), Some(id(127)));
        assert_eq!(find("encoder9_group1"), None);
    }

    #[test]
    fn test_const_helpers_match_layout() {
        assert_eq!(group_encoder(2, 1), id(8));
        assert_eq!(button(2, 4), id(83));

        for e in elements() {
            let expected = match e.section {
                Section::EncoderGroup(g) => group_encoder(g, e.position),
                Section::ButtonRow(r) => button(r, e.position),
                Section::EncoderRow(_) | Section::Corner(_) => continue,
            };
            assert_eq!(expected, e.id);
        }
    }

    #[test]
    fn test_layout_size() {
        // 16 group encoders, 24 row encoders, 15 row buttons, 4 corners
        assert_eq!(elements().count(), 59);
        assert_eq!(elements().filter(|e| e.is_button()).count(), 19);
    }
}
