//! Feeds press and useable input into consumable icons.

use crate::{ConsumableIcon, IconTrace};
use bevy::prelude::*;

pub struct ConsumableIconPlugin;

impl Plugin for ConsumableIconPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<IconInput>()
            .init_resource::<IconTrace>()
            .add_systems(Update, apply_icon_input.in_set(IconSystems));
    }
}

/// Systems that change icon state. Order against this to see the result.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconSystems;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAction {
    Press,
    SetUseable(bool),
}

#[derive(Event, Debug, Clone, Copy)]
pub struct IconInput {
    pub icon: Entity,
    pub action: IconAction,
}

fn apply_icon_input(
    mut input_events: EventReader<IconInput>,
    mut icon_query: Query<&mut ConsumableIcon>,
    mut trace: ResMut<IconTrace>,
) {
    for input in input_events.read() {
        // get the icon the input is for
        let Ok(mut icon) = icon_query.get_mut(input.icon) else {
            warn!("No consumable icon on {:?}, dropping {:?}.", input.icon, input.action);
            continue;
        };

        match input.action {
            IconAction::Press => icon.on_pressed(&mut *trace),
            IconAction::SetUseable(useable) => icon.set_useable(useable, &mut *trace),
        }
    }
}
