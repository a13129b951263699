//! Panel presenter
//!
//! Renders the summary, menu highlight and edit screens onto a
//! [`CharacterDisplay`]. Value slots are always blanked before a new value
//! is written, so a shorter number never leaves digits of a longer one
//! behind.

use core::fmt::Write;

use heapless::String;
use reflow_display::{CharacterDisplay, DisplayError};

use super::layout::{
    self, Slot, EDIT_PROGRESS_ROW, EDIT_ROW, EDIT_UNIT_COL, EDIT_VALUE, EDIT_VALUE_COL,
    SUMMARY_TAGS,
};
use crate::config::{ProfileField, ReflowProfile, FIELD_COUNT, FIELD_WIDTH};
use crate::state::{EditStep, MenuEntry};

/// One full row of blanks
const BLANKS: &str = "                ";

/// Renders panel state onto a character display
pub struct Presenter<D> {
    display: D,
}

impl<D: CharacterDisplay> Presenter<D> {
    /// Create a presenter drawing on `display`
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Draw the profile summary and the Run/Edit menu
    pub fn render_summary(&mut self, profile: &ReflowProfile) -> Result<(), DisplayError> {
        self.display.clear()?;

        for (text, col, row) in SUMMARY_TAGS {
            self.display.write_at(col, row, text)?;
        }

        for field in ProfileField::ALL {
            if let Some(slot) = layout::summary_slot(field) {
                self.write_value(profile.get(field), slot)?;
            }
        }

        Ok(())
    }

    /// Move the menu highlight to `entry`
    pub fn render_selection(&mut self, entry: MenuEntry) -> Result<(), DisplayError> {
        let (col, row) = layout::menu_cursor(entry);
        self.display.set_cursor(col, row)
    }

    /// Draw `label` at the start of `row` and `value` at (`column`, `row`)
    ///
    /// Only the label cells and the value slot are touched.
    pub fn render_edit_field(
        &mut self,
        label: &str,
        value: u16,
        column: u8,
        row: u8,
    ) -> Result<(), DisplayError> {
        self.display.write_at(0, row, label)?;
        self.write_value(
            value,
            Slot {
                col: column,
                row,
                width: FIELD_WIDTH,
            },
        )
    }

    /// Draw the full edit screen for a step
    pub fn render_edit_step(&mut self, step: EditStep, value: u16) -> Result<(), DisplayError> {
        let spec = step.field().spec();
        self.display.clear()?;
        self.render_edit_field(spec.label, value, EDIT_VALUE_COL, EDIT_ROW)?;
        self.display.write_at(EDIT_UNIT_COL, EDIT_ROW, spec.unit)?;

        let mut progress: String<16> = String::new();
        let _ = write!(progress, "Field {}/{}", step.index() + 1, FIELD_COUNT);
        self.display.write_at(0, EDIT_PROGRESS_ROW, progress.as_str())?;

        self.display.set_cursor(EDIT_VALUE_COL, EDIT_ROW)
    }

    /// Redraw only the edited value
    pub fn render_edit_value(&mut self, value: u16) -> Result<(), DisplayError> {
        self.write_value(value, EDIT_VALUE)?;
        self.display.set_cursor(EDIT_VALUE_COL, EDIT_ROW)
    }

    /// Blank a slot, then write `value` left-aligned into it
    fn write_value(&mut self, value: u16, slot: Slot) -> Result<(), DisplayError> {
        let width = (slot.width as usize).min(BLANKS.len());
        self.display.write_at(slot.col, slot.row, &BLANKS[..width])?;

        let mut text: String<8> = String::new();
        let _ = write!(text, "{}", value);
        let end = text.len().min(width);
        self.display.write_at(slot.col, slot.row, &text.as_str()[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_display::TextGrid;

    fn presenter() -> Presenter<TextGrid> {
        Presenter::new(TextGrid::new())
    }

    #[test]
    fn test_summary_layout() {
        let mut p = presenter();
        p.render_summary(&ReflowProfile::default()).unwrap();
        assert_eq!(p.display().line(0), "S:150 R:225 T:40");
        assert_eq!(p.display().line(1), "Run:   Edit:    ");
    }

    #[test]
    fn test_selection_cursor() {
        let mut p = presenter();
        p.render_summary(&ReflowProfile::default()).unwrap();
        p.render_selection(MenuEntry::Run).unwrap();
        assert_eq!(p.display().cursor(), (4, 1));
        p.render_selection(MenuEntry::Edit).unwrap();
        assert_eq!(p.display().cursor(), (12, 1));
    }

    #[test]
    fn test_edit_step_screen() {
        let mut p = presenter();
        p.render_edit_step(EditStep::FIRST, 150).unwrap();
        assert_eq!(p.display().line(0), "Soak Temp:150 C ");
        assert_eq!(p.display().line(1), "Field 1/4       ");
        assert_eq!(p.display().cursor(), (EDIT_VALUE_COL, EDIT_ROW));
    }

    #[test]
    fn test_shorter_value_erases_stale_digits() {
        let mut p = presenter();
        p.render_edit_step(EditStep::FIRST, 150).unwrap();
        p.render_edit_value(9).unwrap();
        assert_eq!(p.display().region(10, 0, 3), "9  ");
        assert_eq!(p.display().line(0), "Soak Temp:9   C ");
    }

    #[test]
    fn test_edit_value_does_not_clear_screen() {
        let mut p = presenter();
        p.render_edit_step(EditStep::FIRST, 150).unwrap();
        let clears = p.display().clears();
        p.render_edit_value(151).unwrap();
        assert_eq!(p.display().clears(), clears);
        assert_eq!(p.display().line(1), "Field 1/4       ");
    }

    #[test]
    fn test_render_edit_field_leaves_other_row() {
        let mut p = presenter();
        p.render_summary(&ReflowProfile::default()).unwrap();
        let clears = p.display().clears();

        p.render_edit_field("Soak Time:", 60, 10, 1).unwrap();
        assert_eq!(p.display().line(0), "S:150 R:225 T:40");
        assert_eq!(p.display().line(1), "Soak Time:60    ");
        assert_eq!(p.display().clears(), clears);
    }

    #[test]
    fn test_edit_step_clears_previous_screen() {
        let mut p = presenter();
        p.render_summary(&ReflowProfile::default()).unwrap();
        p.render_edit_step(EditStep::FIRST, 150).unwrap();
        assert_eq!(p.display().line(0), "Soak Temp:150 C ");
        assert_eq!(p.display().line(1), "Field 1/4       ");
    }

    #[test]
    fn test_last_step_indicator() {
        let mut p = presenter();
        let last = EditStep::new(FIELD_COUNT - 1).unwrap();
        p.render_edit_step(last, 40).unwrap();
        assert_eq!(p.display().line(0), "Refl Time:40  s ");
        assert_eq!(p.display().line(1), "Field 4/4       ");
    }
}
