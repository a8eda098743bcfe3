//! The fixed button scenario, one step per frame.
//!
//! Every step writes a numbered header, pokes the icon, then an empty line.
//! The app exits once the last step is closed.

use super::icon_input::{IconAction, IconInput, IconSystems};
use crate::{ConsumableIcon, IconTrace, TraceSink};
use bevy::prelude::*;
use strum::{EnumCount, EnumIter, EnumMessage, IntoEnumIterator};

pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scenario).add_systems(
            Update,
            (
                open_step.before(IconSystems),
                close_step.after(IconSystems),
            ),
        );
    }
}

pub const BANNER: &str = "=== Testing ConsumableIcon Button Behavior ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, EnumCount)]
pub enum ScenarioStep {
    #[strum(message = "Initial state (not useable, not pressed):")]
    Initial,
    #[strum(message = "Press card (should show buttons but use button disabled):")]
    FirstPress,
    #[strum(message = "Make consumable useable (should enable use button):")]
    MakeUseable,
    #[strum(message = "Make consumable not useable (should disable use button but keep visible):")]
    MakeUnuseable,
    #[strum(message = "Press card again (should hide buttons):")]
    HidingPress,
    #[strum(message = "Press card again (should show buttons, use disabled since not useable):")]
    ShowingPress,
}

impl ScenarioStep {
    /// What the step does to the icon, `None` for just looking at it.
    pub fn action(self) -> Option<IconAction> {
        match self {
            ScenarioStep::Initial => None,
            ScenarioStep::FirstPress | ScenarioStep::HidingPress | ScenarioStep::ShowingPress => {
                Some(IconAction::Press)
            }
            ScenarioStep::MakeUseable => Some(IconAction::SetUseable(true)),
            ScenarioStep::MakeUnuseable => Some(IconAction::SetUseable(false)),
        }
    }

    pub fn header(self, number: usize) -> String {
        format!("{number}. {}", self.get_message().unwrap_or_default())
    }
}

#[derive(Resource, Debug)]
pub struct Scenario {
    pub icon: Entity,
    /// Index of the next step to open.
    next: usize,
    open: Option<ScenarioStep>,
}

impl Scenario {
    pub fn finished(&self) -> bool {
        self.open.is_none() && self.next >= ScenarioStep::COUNT
    }
}

fn setup_scenario(mut commands: Commands, mut trace: ResMut<IconTrace>) {
    let icon = commands.spawn(ConsumableIcon::new()).id();

    trace.record(BANNER);
    trace.record("");

    info!("Running {} step button scenario.", ScenarioStep::COUNT);

    commands.insert_resource(Scenario {
        icon,
        next: 0,
        open: None,
    });
}

fn open_step(
    mut scenario: ResMut<Scenario>,
    icon_query: Query<&ConsumableIcon>,
    mut trace: ResMut<IconTrace>,
    mut input_events: EventWriter<IconInput>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    // out of steps
    let Some(step) = ScenarioStep::iter().nth(scenario.next) else {
        if scenario.open.is_none() {
            app_exit_events.send(AppExit::Success);
        }
        return;
    };

    trace.record(&step.header(scenario.next + 1));

    match step.action() {
        Some(action) => {
            input_events.send(IconInput {
                icon: scenario.icon,
                action,
            });
        }
        None => {
            if let Ok(icon) = icon_query.get(scenario.icon) {
                trace.record(&format!("   {}", icon.describe()));
            }
        }
    }

    scenario.open = Some(step);
    scenario.next += 1;
}

fn close_step(mut scenario: ResMut<Scenario>, mut trace: ResMut<IconTrace>) {
    if scenario.open.take().is_some() {
        trace.record("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::icon_input::ConsumableIconPlugin;

    fn scenario_app() -> App {
        let mut app = App::new();
        app.add_plugins((ConsumableIconPlugin, ScenarioPlugin))
            .insert_resource(IconTrace::recorded());
        app
    }

    fn run_to_exit(app: &mut App) -> usize {
        let mut frames = 0;
        while app.should_exit().is_none() {
            app.update();
            frames += 1;
            assert!(frames <= 20, "scenario never finished");
        }
        frames
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let headers: Vec<String> = ScenarioStep::iter()
            .enumerate()
            .map(|(i, step)| step.header(i + 1))
            .collect();

        assert_eq!(headers.len(), 6);
        assert_eq!(headers[0], "1. Initial state (not useable, not pressed):");
        assert_eq!(
            headers[5],
            "6. Press card again (should show buttons, use disabled since not useable):"
        );
    }

    #[test]
    fn full_scenario_trace() {
        let mut app = scenario_app();
        let frames = run_to_exit(&mut app);

        // one frame per step, then one to ask for exit
        assert_eq!(frames, ScenarioStep::COUNT + 1);
        assert_eq!(app.should_exit(), Some(AppExit::Success));
        assert!(app.world().resource::<Scenario>().finished());

        let lines = app.world().resource::<IconTrace>().recorded_lines().unwrap();
        let expected = [
            "=== Testing ConsumableIcon Button Behavior ===",
            "",
            "1. Initial state (not useable, not pressed):",
            "   sell_visible=false, use_visible=false, use_disabled=true",
            "",
            "2. Press card (should show buttons but use button disabled):",
            "Before press: sell_visible=false, use_visible=false",
            "After press: sell_visible=true, use_visible=true",
            "Button states: sell_visible=true, use_visible=true, use_disabled=true",
            "",
            "3. Make consumable useable (should enable use button):",
            "Setting useable to: true",
            "Updated use button: visible=true, disabled=false",
            "",
            "4. Make consumable not useable (should disable use button but keep visible):",
            "Setting useable to: false",
            "Updated use button: visible=true, disabled=true",
            "",
            "5. Press card again (should hide buttons):",
            "Before press: sell_visible=true, use_visible=true",
            "After press: sell_visible=false, use_visible=false",
            "Button states: sell_visible=false, use_visible=false, use_disabled=true",
            "",
            "6. Press card again (should show buttons, use disabled since not useable):",
            "Before press: sell_visible=false, use_visible=false",
            "After press: sell_visible=true, use_visible=true",
            "Button states: sell_visible=true, use_visible=true, use_disabled=true",
            "",
        ];
        assert_eq!(lines, &expected[..]);
    }

    #[test]
    fn scenario_ends_with_buttons_shown_and_disabled() {
        let mut app = scenario_app();
        run_to_exit(&mut app);

        let icon = app.world().resource::<Scenario>().icon;
        let state = app.world().get::<ConsumableIcon>(icon).unwrap().snapshot();

        assert!(state.sell_button_visible);
        assert!(state.use_button_visible);
        assert!(state.use_button_disabled);
        assert!(!state.is_useable);
    }

    #[test]
    fn each_frame_runs_one_step() {
        let mut app = scenario_app();

        app.update();
        app.update();

        let icon = app.world().resource::<Scenario>().icon;
        let icon = app.world().get::<ConsumableIcon>(icon).unwrap();
        assert!(icon.sell_button_visible());
        assert!(app.should_exit().is_none());
    }
}
