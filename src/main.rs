//! Solarview - stylized 2D solar system display.
//!
//! A desktop application drawing reference rings, cross-hairs, and
//! Keplerian ellipse approximations of the inner-planet orbits.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solarview::render::RenderPlugin;
use solarview::ui::UiPlugin;
use solarview::view::{DEFAULT_SCALE_KM_PER_PX, Viewport};

fn main() {
    let viewport =
        Viewport::with_scale(DEFAULT_SCALE_KM_PER_PX).expect("default scale is positive");

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert before the plugins that read it so the startup scale wins
        // over the plugin's default.
        .insert_resource(viewport)
        .add_plugins((RenderPlugin, UiPlugin))
        .run();
}
