//! Invaderers bootstrap: wires the canvas attributes and the battle helper
//! into the canvas helper host.

use crate::battle::BattleHelper;
use crate::canvas::{
    create_canvas_helper, CanvasElement, CanvasError, CanvasHelper, CanvasHooks, CanvasHost,
    CanvasOptions, InitCanvasProps,
};
use crate::palette::COLORS;
use crate::settings::GameSettings;

#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub container_id: String,
}

/// Helpers built for each game
pub struct InvaderersHelpers {
    pub battle_helper: BattleHelper,
}

/// Lifecycle hooks for the invaderers game
#[derive(Debug, Clone, Copy, Default)]
pub struct InvaderersHooks;

impl CanvasHooks for InvaderersHooks {
    type Settings = GameSettings;
    type Helpers = InvaderersHelpers;

    fn bind_custom_settings(&self, canvas: &dyn CanvasElement) -> GameSettings {
        let settings = GameSettings::from_attributes(canvas);
        log::debug!("Invaderers settings: {:?}", settings);
        settings
    }

    fn bind_custom_helpers(&self, props: InitCanvasProps<GameSettings>) -> InvaderersHelpers {
        let InitCanvasProps {
            screen_settings,
            map_observers,
        } = props;
        let battle_helper = BattleHelper::new(&screen_settings, map_observers);
        InvaderersHelpers { battle_helper }
    }

    fn on_reset(&self, helpers: &mut InvaderersHelpers) {
        helpers.battle_helper.reset_game();
    }
}

pub type InvaderersGame = CanvasHelper<InvaderersHooks>;

/// Start a game in the canvas inside `container_id`
pub fn setup_game<C: CanvasHost>(
    host: &C,
    options: SetupOptions,
) -> Result<InvaderersGame, CanvasError> {
    log::info!("Setting up invaderers in `{}`", options.container_id);
    create_canvas_helper(
        host,
        CanvasOptions {
            container_id: options.container_id,
            fill_colors: COLORS,
            hooks: InvaderersHooks,
        },
    )
}
