//! Mode state machine definition
//!
//! All panel behavior is a function of the current mode and an event.

use super::events::Event;
use super::step::EditStep;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEntry {
    /// Run the stored profile
    Run,
    /// Edit the stored profile
    Edit,
}

impl MenuEntry {
    /// Tracker position of the first entry (minimum of the selection range)
    pub const POSITION_MIN: i32 = 0;

    /// Tracker position of the last entry (maximum of the selection range)
    pub const POSITION_MAX: i32 = 1;

    /// Entry at a tracker position
    ///
    /// Only the two extremes name an entry; anything between them leaves
    /// the highlight where it was.
    pub fn from_position(position: i32) -> Option<Self> {
        match position {
            p if p <= Self::POSITION_MIN => Some(MenuEntry::Run),
            p if p >= Self::POSITION_MAX => Some(MenuEntry::Edit),
            _ => None,
        }
    }

    /// Tracker position of this entry
    pub fn position(self) -> i32 {
        match self {
            MenuEntry::Run => Self::POSITION_MIN,
            MenuEntry::Edit => Self::POSITION_MAX,
        }
    }
}

/// Panel modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Summary screen, operator picks Run or Edit
    SelectingMode {
        /// Entry under the cursor
        highlighted: MenuEntry,
    },
    /// Operator editing profile fields one at a time
    Editing(EditStep),
    /// Profile execution
    Running,
}

impl Default for Mode {
    fn default() -> Self {
        Self::START
    }
}

impl Mode {
    /// Mode at power-up and after every return to the menu
    pub const START: Mode = Mode::SelectingMode {
        highlighted: MenuEntry::Run,
    };

    /// Check if the profile is executing
    pub fn is_running(&self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Current edit step, if editing
    pub fn edit_step(&self) -> Option<EditStep> {
        match self {
            Mode::Editing(step) => Some(*step),
            _ => None,
        }
    }

    /// Process an event and return the next mode
    ///
    /// Pairs not listed leave the mode unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Menu
            (SelectingMode { .. }, Highlight(entry)) => SelectingMode { highlighted: entry },
            (SelectingMode { highlighted: MenuEntry::Run }, Confirm) => Running,
            (SelectingMode { highlighted: MenuEntry::Edit }, Confirm) => Editing(EditStep::FIRST),

            // Editor: confirm advances, past the last field returns to the menu
            (Editing(step), Confirm) => match step.next() {
                Some(next) => Editing(next),
                None => Self::START,
            },

            // Running
            (Running, RunComplete) => Self::START,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELD_COUNT;

    #[test]
    fn test_confirm_on_run_starts_running() {
        let mode = Mode::SelectingMode {
            highlighted: MenuEntry::from_position(MenuEntry::POSITION_MIN).unwrap(),
        };
        assert_eq!(mode.transition(Event::Confirm), Mode::Running);
    }

    #[test]
    fn test_confirm_on_edit_starts_editing() {
        let mode = Mode::SelectingMode {
            highlighted: MenuEntry::from_position(MenuEntry::POSITION_MAX).unwrap(),
        };
        assert_eq!(mode.transition(Event::Confirm), Mode::Editing(EditStep::FIRST));
    }

    #[test]
    fn test_highlight_moves_without_selecting() {
        let mode = Mode::START.transition(Event::Highlight(MenuEntry::Edit));
        assert_eq!(
            mode,
            Mode::SelectingMode {
                highlighted: MenuEntry::Edit
            }
        );
        let back = mode.transition(Event::Highlight(MenuEntry::Run));
        assert_eq!(back, Mode::START);
    }

    #[test]
    fn test_editing_walks_all_fields() {
        let mut mode = Mode::Editing(EditStep::FIRST);
        for expected in 1..FIELD_COUNT {
            mode = mode.transition(Event::Confirm);
            assert_eq!(mode.edit_step().map(EditStep::index), Some(expected));
        }
        mode = mode.transition(Event::Confirm);
        assert_eq!(mode, Mode::START);
    }

    #[test]
    fn test_n_confirms_close_editor() {
        let mut mode = Mode::START.transition(Event::Highlight(MenuEntry::Edit));
        mode = mode.transition(Event::Confirm);
        assert_eq!(mode, Mode::Editing(EditStep::FIRST));
        for _ in 0..FIELD_COUNT {
            mode = mode.transition(Event::Confirm);
        }
        assert_eq!(mode, Mode::START);
    }

    #[test]
    fn test_running_returns_to_menu() {
        assert_eq!(Mode::Running.transition(Event::RunComplete), Mode::START);
    }

    #[test]
    fn test_ignored_events_keep_mode() {
        assert_eq!(Mode::Running.transition(Event::Confirm), Mode::Running);
        assert_eq!(
            Mode::Running.transition(Event::Highlight(MenuEntry::Edit)),
            Mode::Running
        );
        let editing = Mode::Editing(EditStep::FIRST);
        assert_eq!(editing.transition(Event::Highlight(MenuEntry::Run)), editing);
        assert_eq!(editing.transition(Event::RunComplete), editing);
        assert_eq!(Mode::START.transition(Event::RunComplete), Mode::START);
    }

    #[test]
    fn test_menu_positions() {
        assert_eq!(MenuEntry::from_position(-3), Some(MenuEntry::Run));
        assert_eq!(MenuEntry::from_position(7), Some(MenuEntry::Edit));
        assert_eq!(MenuEntry::Run.position(), 0);
        assert_eq!(MenuEntry::Edit.position(), 1);
    }
}
