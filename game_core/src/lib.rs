pub mod battle;
pub mod canvas;
pub mod components;
pub mod number;
pub mod observers;
pub mod palette;
pub mod params;
pub mod resources;
pub mod settings;
pub mod setup;

pub use battle::*;
pub use canvas::*;
pub use components::*;
pub use observers::*;
pub use palette::*;
pub use params::*;
pub use resources::*;
pub use settings::*;
pub use setup::*;
