//! Sequential parameter editor
//!
//! Active only while the panel is in [`Mode::Editing`](crate::state::Mode).
//! Each step binds the knob to one profile field: entering the step seeds
//! the knob with the stored value, and every detent afterwards is written
//! straight into the profile. Advancing between steps is the mode state
//! machine's job.

use reflow_display::{CharacterDisplay, DisplayError};

use crate::config::{ProfileField, ReflowProfile};
use crate::input::PositionTracker;
use crate::state::EditStep;
use crate::traits::QuadratureCounter;
use crate::ui::Presenter;

/// A field change made by the knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldEdit {
    /// Field that changed
    pub field: ProfileField,
    /// Value now stored
    pub value: u16,
}

/// Bind the knob to the step's field and draw the step
///
/// This is the only full redraw inside an edit session.
pub fn enter_step<C, D>(
    step: EditStep,
    profile: &ReflowProfile,
    tracker: &mut PositionTracker<C>,
    presenter: &mut Presenter<D>,
) -> Result<(), DisplayError>
where
    C: QuadratureCounter,
    D: CharacterDisplay,
{
    let field = step.field();
    let spec = field.spec();
    let value = profile.get(field);

    tracker.set_bounds(spec.min.into(), spec.max.into());
    tracker.seed(value.into());

    presenter.render_edit_step(step, value)
}

/// Apply knob motion to the step's field
///
/// Does nothing unless the knob moved by at least one detent. On change
/// the new value is stored and only the value slot is redrawn. The edit is
/// returned even if the redraw failed, since the profile already holds it.
pub fn track_step<C, D>(
    step: EditStep,
    profile: &mut ReflowProfile,
    tracker: &mut PositionTracker<C>,
    presenter: &mut Presenter<D>,
) -> (Option<FieldEdit>, Result<(), DisplayError>)
where
    C: QuadratureCounter,
    D: CharacterDisplay,
{
    let Some(position) = tracker.poll() else {
        return (None, Ok(()));
    };

    let field = step.field();
    // Tracker bounds are the field bounds, so this never saturates
    let value = profile.set(field, position.clamp(0, u16::MAX.into()) as u16);
    let drawn = presenter.render_edit_value(value);

    (Some(FieldEdit { field, value }), drawn)
}
