//! Front panel main-loop step
//!
//! [`FrontPanel`] owns the mode, the profile, the knob tracker and the
//! presenter. The main loop calls [`FrontPanel::poll`] once per iteration
//! with the debounced button state; every transition runs to completion
//! inside that call.

use embedded_hal::delay::DelayNs;
use reflow_display::{CharacterDisplay, DisplayError};

use crate::config::{FrontPanelConfig, ReflowProfile};
use crate::editor::{self, FieldEdit};
use crate::input::PositionTracker;
use crate::state::{Event, MenuEntry, Mode};
use crate::traits::{QuadratureCounter, SensorFault};
use crate::ui::Presenter;

/// What happened during one [`FrontPanel::poll`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelUpdate {
    /// Mode entered through a transition
    pub entered: Option<Mode>,
    /// Menu highlight moved
    pub highlighted: Option<MenuEntry>,
    /// Profile field changed by the knob
    pub edited: Option<FieldEdit>,
}

impl PanelUpdate {
    /// Check if nothing happened
    pub fn is_idle(&self) -> bool {
        self.entered.is_none() && self.highlighted.is_none() && self.edited.is_none()
    }
}

/// Front panel controller
pub struct FrontPanel<C, D, W> {
    mode: Mode,
    profile: ReflowProfile,
    tracker: PositionTracker<C>,
    presenter: Presenter<D>,
    delay: W,
    config: FrontPanelConfig,
    /// Fault flag consulted by Running
    fault: Option<SensorFault>,
    /// Most recent display failure not yet collected
    display_error: Option<DisplayError>,
}

impl<C, D, W> FrontPanel<C, D, W>
where
    C: QuadratureCounter,
    D: CharacterDisplay,
    W: DelayNs,
{
    /// Create a panel; call [`start`](Self::start) before polling
    pub fn new(
        counter: C,
        display: D,
        delay: W,
        profile: ReflowProfile,
        config: FrontPanelConfig,
    ) -> Self {
        let tracker = PositionTracker::with_pulses_per_detent(
            counter,
            config.pulses_per_detent,
            MenuEntry::POSITION_MIN,
            MenuEntry::POSITION_MAX,
        );

        Self {
            mode: Mode::START,
            profile,
            tracker,
            presenter: Presenter::new(display),
            delay,
            config,
            fault: None,
            display_error: None,
        }
    }

    /// Draw the start screen and seed the knob
    pub fn start(&mut self) {
        self.enter(Mode::START);
    }

    /// Run one main-loop iteration
    ///
    /// `confirm` is true when a debounced button press is pending.
    pub fn poll(&mut self, confirm: bool) -> PanelUpdate {
        let mut update = PanelUpdate::default();

        let next = match self.mode {
            Mode::SelectingMode { highlighted } => {
                // Between detents the current highlight stands
                if let Some(entry) = self.tracker.read_detent().and_then(MenuEntry::from_position) {
                    if entry != highlighted {
                        self.mode = self.mode.transition(Event::Highlight(entry));
                        let drawn = self.presenter.render_selection(entry);
                        self.note(drawn);
                        update.highlighted = Some(entry);
                    }
                }
                confirm.then(|| self.mode.transition(Event::Confirm))
            }
            Mode::Editing(step) => {
                let (edit, drawn) = editor::track_step(
                    step,
                    &mut self.profile,
                    &mut self.tracker,
                    &mut self.presenter,
                );
                self.note(drawn);
                update.edited = edit;
                confirm.then(|| self.mode.transition(Event::Confirm))
            }
            Mode::Running => {
                self.run();
                Some(self.mode.transition(Event::RunComplete))
            }
        };

        if let Some(mode) = next {
            self.enter(mode);
            update.entered = Some(mode);
        }

        update
    }

    /// Placeholder profile execution
    ///
    /// Thermal control is not implemented; Running is a short bounded
    /// pause that blocks the loop. A reported sensor fault skips it.
    fn run(&mut self) {
        if self.fault.is_none() {
            self.delay.delay_ms(self.config.run_pause_ms);
        }
    }

    /// Perform the entry action of `mode` and make it current
    fn enter(&mut self, mode: Mode) {
        self.mode = mode;

        let drawn = match mode {
            Mode::SelectingMode { highlighted } => {
                self.tracker
                    .set_bounds(MenuEntry::POSITION_MIN, MenuEntry::POSITION_MAX);
                self.tracker.seed(highlighted.position());
                self.presenter
                    .render_summary(&self.profile)
                    .and_then(|()| self.presenter.render_selection(highlighted))
            }
            Mode::Editing(step) => {
                editor::enter_step(step, &self.profile, &mut self.tracker, &mut self.presenter)
            }
            Mode::Running => Ok(()),
        };
        self.note(drawn);
    }

    fn note(&mut self, drawn: Result<(), DisplayError>) {
        if let Err(e) = drawn {
            self.display_error = Some(e);
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current profile
    pub fn profile(&self) -> &ReflowProfile {
        &self.profile
    }

    /// Report the temperature front end's fault state
    pub fn set_fault(&mut self, fault: Option<SensorFault>) {
        self.fault = fault;
    }

    /// Current sensor fault, if any
    pub fn fault(&self) -> Option<SensorFault> {
        self.fault
    }

    /// Collect the most recent display failure
    pub fn take_display_error(&mut self) -> Option<DisplayError> {
        self.display_error.take()
    }

    /// Get access to the knob tracker
    pub fn tracker(&self) -> &PositionTracker<C> {
        &self.tracker
    }

    /// Get mutable access to the knob tracker
    pub fn tracker_mut(&mut self) -> &mut PositionTracker<C> {
        &mut self.tracker
    }

    /// Get access to the display
    pub fn display(&self) -> &D {
        self.presenter.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELD_COUNT;
    use crate::state::EditStep;
    use reflow_display::TextGrid;

    #[derive(Default)]
    struct MockCounter {
        raw: i32,
    }

    impl QuadratureCounter for MockCounter {
        fn count(&self) -> i32 {
            self.raw
        }

        fn set_count(&mut self, count: i32) {
            self.raw = count;
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    /// Display that fails every operation
    struct BrokenDisplay;

    impl CharacterDisplay for BrokenDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }

        fn write_at(&mut self, _col: u8, _row: u8, _text: &str) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }

        fn set_cursor(&mut self, _col: u8, _row: u8) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }

        fn dimensions(&self) -> (u8, u8) {
            (16, 2)
        }
    }

    type TestPanel = FrontPanel<MockCounter, TextGrid, MockDelay>;

    fn panel() -> TestPanel {
        let mut panel = FrontPanel::new(
            MockCounter::default(),
            TextGrid::new(),
            MockDelay::default(),
            ReflowProfile::default(),
            FrontPanelConfig::default(),
        );
        panel.start();
        panel
    }

    /// Turn the knob by whole detents
    fn turn(panel: &mut TestPanel, detents: i32) {
        panel.tracker_mut().counter_mut().raw += detents * 4;
    }

    fn raw(panel: &TestPanel) -> i32 {
        panel.tracker().counter().raw
    }

    #[test]
    fn test_start_screen() {
        let panel = panel();
        assert_eq!(panel.mode(), Mode::START);
        assert_eq!(panel.display().line(0), "S:150 R:225 T:40");
        assert_eq!(panel.display().line(1), "Run:   Edit:    ");
        assert_eq!(panel.display().cursor(), (4, 1));
        assert_eq!(raw(&panel), 0);
    }

    #[test]
    fn test_knob_moves_highlight_only() {
        let mut panel = panel();
        turn(&mut panel, 1);
        let update = panel.poll(false);
        assert_eq!(update.highlighted, Some(MenuEntry::Edit));
        assert!(update.entered.is_none());
        assert_eq!(panel.display().cursor(), (12, 1));

        // Turning further is clamped to the Edit position
        turn(&mut panel, 5);
        assert!(panel.poll(false).is_idle());
        assert_eq!(raw(&panel), 4);

        turn(&mut panel, -1);
        assert_eq!(panel.poll(false).highlighted, Some(MenuEntry::Run));
        assert_eq!(panel.display().cursor(), (4, 1));
    }

    #[test]
    fn test_single_pulse_jitter_keeps_highlight() {
        let mut panel = panel();
        turn(&mut panel, 1);
        assert_eq!(panel.poll(false).highlighted, Some(MenuEntry::Edit));

        panel.tracker_mut().counter_mut().raw -= 1;
        assert!(panel.poll(false).is_idle());
        assert_eq!(panel.display().cursor(), (12, 1));

        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::Editing(EditStep::FIRST)));
    }

    #[test]
    fn test_jitter_below_run_keeps_highlight() {
        let mut panel = panel();
        panel.tracker_mut().counter_mut().raw = -1;
        assert!(panel.poll(false).is_idle());
        panel.tracker_mut().counter_mut().raw = 3;
        assert!(panel.poll(false).is_idle());

        assert_eq!(panel.poll(true).entered, Some(Mode::Running));
    }

    #[test]
    fn test_idle_loop_writes_nothing() {
        let mut panel = panel();
        let writes = panel.display().writes();
        for _ in 0..100 {
            assert!(panel.poll(false).is_idle());
        }
        assert_eq!(panel.display().writes(), writes);
    }

    #[test]
    fn test_confirm_on_run_runs_then_returns() {
        let mut panel = panel();
        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::Running));

        let update = panel.poll(false);
        assert_eq!(update.entered, Some(Mode::START));
        assert_eq!(panel.delay.total_ns, 100 * 1_000_000);
        assert_eq!(panel.display().line(0), "S:150 R:225 T:40");
        assert_eq!(raw(&panel), 0);
    }

    #[test]
    fn test_confirm_during_running_is_ignored() {
        let mut panel = panel();
        panel.poll(true);
        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::START));
        assert_eq!(panel.mode(), Mode::START);
    }

    #[test]
    fn test_fault_skips_run_pause() {
        let mut panel = panel();
        panel.set_fault(Some(SensorFault::OpenCircuit));
        panel.poll(true);
        let update = panel.poll(false);
        assert_eq!(update.entered, Some(Mode::START));
        assert_eq!(panel.delay.total_ns, 0);
        assert_eq!(panel.fault(), Some(SensorFault::OpenCircuit));
    }

    #[test]
    fn test_each_confirm_reseeds_next_field() {
        let mut panel = panel();
        turn(&mut panel, 1);
        panel.poll(false);
        panel.poll(true);

        let profile = *panel.profile();
        for index in 0..FIELD_COUNT {
            let step = EditStep::new(index).unwrap();
            assert_eq!(panel.mode(), Mode::Editing(step));
            assert_eq!(raw(&panel), i32::from(profile.get(step.field())) * 4);
            panel.poll(true);
        }
        assert_eq!(panel.mode(), Mode::START);
        assert_eq!(panel.profile(), &profile);
    }

    #[test]
    fn test_reflow_edit_scenario() {
        let mut panel = panel();

        // Rotate to Edit, press
        turn(&mut panel, 1);
        panel.poll(false);
        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::Editing(EditStep::FIRST)));
        assert_eq!(panel.display().region(10, 0, 3), "150");

        // Rotate to 160
        turn(&mut panel, 10);
        let update = panel.poll(false);
        assert_eq!(
            update.edited,
            Some(FieldEdit {
                field: crate::config::ProfileField::SoakTemp,
                value: 160
            })
        );
        assert_eq!(panel.display().region(10, 0, 3), "160");
        assert_eq!(panel.profile().soak_temp_c, 160);

        // Press: soak time seeded to 60
        panel.poll(true);
        assert_eq!(panel.mode().edit_step().map(EditStep::index), Some(1));
        assert_eq!(raw(&panel), 60 * 4);
        assert_eq!(panel.display().region(10, 0, 3), "60 ");

        // Three more presses without rotating
        panel.poll(true);
        panel.poll(true);
        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::START));

        let profile = panel.profile();
        assert_eq!(profile.soak_temp_c, 160);
        assert_eq!(profile.soak_time_s, 60);
        assert_eq!(profile.reflow_temp_c, 225);
        assert_eq!(profile.reflow_time_s, 40);
        assert_eq!(panel.display().line(0), "S:160 R:225 T:40");
        assert_eq!(panel.display().cursor(), (4, 1));
    }

    #[test]
    fn test_edit_redraws_only_on_change() {
        let mut panel = panel();
        turn(&mut panel, 1);
        panel.poll(false);
        panel.poll(true);
        let clears = panel.display().clears();
        let writes = panel.display().writes();

        // Sub-detent jitter
        panel.tracker_mut().counter_mut().raw += 2;
        assert!(panel.poll(false).is_idle());
        assert_eq!(panel.display().writes(), writes);

        turn(&mut panel, 1);
        panel.poll(false);
        assert_eq!(panel.display().clears(), clears);
        assert_eq!(panel.display().writes(), writes + 2);
    }

    #[test]
    fn test_display_failure_does_not_stop_panel() {
        let mut panel = FrontPanel::new(
            MockCounter::default(),
            BrokenDisplay,
            MockDelay::default(),
            ReflowProfile::default(),
            FrontPanelConfig::default(),
        );
        panel.start();
        assert_eq!(panel.take_display_error(), Some(DisplayError::Communication));
        assert_eq!(panel.take_display_error(), None);

        panel.tracker_mut().counter_mut().raw = 4;
        panel.poll(false);
        let update = panel.poll(true);
        assert_eq!(update.entered, Some(Mode::Editing(EditStep::FIRST)));
        assert_eq!(panel.take_display_error(), Some(DisplayError::Communication));
    }
}
