//! Canvas helper host.
//!
//! Drives a game's lifecycle hooks against a canvas found in the page:
//! read custom settings from the element, build the game's helpers, then
//! reset. The browser bindings implement [`CanvasHost`] and
//! [`CanvasElement`]; tests use in-memory versions.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::observers::MapObservers;
use crate::palette::Palette;
use crate::params::Params;

/// Read access to element attributes
pub trait AttributeSource {
    fn get_attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A drawable canvas element
pub trait CanvasElement: AttributeSource {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
}

/// The page that holds game containers
pub trait CanvasHost {
    type Canvas: CanvasElement;

    /// Find the canvas for a container id
    fn find_canvas(&self, container_id: &str) -> Option<Self::Canvas>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no canvas found for container `{0}`")]
    ContainerNotFound(String),
}

/// Screen dimensions plus the game's own settings
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSettings<S> {
    pub width: f32,
    pub height: f32,
    pub custom: S,
}

/// What the host passes to [`CanvasHooks::bind_custom_helpers`]
#[derive(Debug, Clone)]
pub struct InitCanvasProps<S> {
    pub screen_settings: ScreenSettings<S>,
    pub map_observers: MapObservers,
}

/// Lifecycle callbacks a game registers with the host
pub trait CanvasHooks {
    type Settings: Clone;
    type Helpers;

    fn bind_custom_settings(&self, canvas: &dyn CanvasElement) -> Self::Settings;

    fn bind_custom_helpers(&self, props: InitCanvasProps<Self::Settings>) -> Self::Helpers;

    fn on_reset(&self, helpers: &mut Self::Helpers);
}

pub struct CanvasOptions<H> {
    pub container_id: String,
    pub fill_colors: Palette,
    pub hooks: H,
}

/// A running canvas game
pub struct CanvasHelper<H: CanvasHooks> {
    container_id: String,
    fill_colors: Palette,
    hooks: H,
    screen_settings: ScreenSettings<H::Settings>,
    map_observers: MapObservers,
    helpers: H::Helpers,
}

/// Find the canvas, bind settings and helpers, then run the first reset
pub fn create_canvas_helper<C, H>(
    host: &C,
    options: CanvasOptions<H>,
) -> Result<CanvasHelper<H>, CanvasError>
where
    C: CanvasHost,
    H: CanvasHooks,
{
    let CanvasOptions {
        container_id,
        fill_colors,
        hooks,
    } = options;

    let canvas = host
        .find_canvas(&container_id)
        .ok_or_else(|| CanvasError::ContainerNotFound(container_id.clone()))?;

    let custom = hooks.bind_custom_settings(&canvas);
    let screen_settings = ScreenSettings {
        width: pixels_or_default(canvas.width(), Params::DEFAULT_CANVAS_WIDTH),
        height: pixels_or_default(canvas.height(), Params::DEFAULT_CANVAS_HEIGHT),
        custom,
    };
    log::debug!(
        "Canvas `{}` is {}x{}",
        container_id,
        screen_settings.width,
        screen_settings.height
    );

    let map_observers = MapObservers::new();
    let mut helpers = hooks.bind_custom_helpers(InitCanvasProps {
        screen_settings: screen_settings.clone(),
        map_observers: map_observers.clone(),
    });

    hooks.on_reset(&mut helpers);
    log::info!("Canvas helper ready for `{}`", container_id);

    Ok(CanvasHelper {
        container_id,
        fill_colors,
        hooks,
        screen_settings,
        map_observers,
        helpers,
    })
}

fn pixels_or_default(value: u32, default: u32) -> f32 {
    if value == 0 {
        default as f32
    } else {
        value as f32
    }
}

impl<H: CanvasHooks> CanvasHelper<H> {
    /// Run the game's reset hook
    pub fn reset(&mut self) {
        log::info!("Resetting `{}`", self.container_id);
        self.hooks.on_reset(&mut self.helpers);
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn fill_colors(&self) -> &Palette {
        &self.fill_colors
    }

    pub fn screen_settings(&self) -> &ScreenSettings<H::Settings> {
        &self.screen_settings
    }

    pub fn map_observers(&self) -> &MapObservers {
        &self.map_observers
    }

    pub fn helpers(&self) -> &H::Helpers {
        &self.helpers
    }

    pub fn helpers_mut(&mut self) -> &mut H::Helpers {
        &mut self.helpers
    }
}
