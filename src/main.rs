use bevy::{
    app::ScheduleRunnerPlugin,
    log::{Level, LogPlugin},
    prelude::*,
    utils::Duration,
};

mod consumable_icon;
mod plugins;
mod trace;

pub use consumable_icon::ConsumableIcon;
pub use trace::{IconTrace, TraceSink};

use plugins::{icon_input::ConsumableIconPlugin, scenario::ScenarioPlugin};

fn main() -> AppExit {
    App::new()
        .add_plugins((
            // headless, no window or renderer
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
            LogPlugin {
                level: Level::INFO,
                filter: "bevy=warn".to_string(),
                ..default()
            },
        ))
        .add_plugins((ConsumableIconPlugin, ScenarioPlugin))
        .run()
}
