//! `web_sys` implementations of the canvas host traits

use game_core::{AttributeSource, CanvasElement, CanvasHost};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl CanvasHost for DomHost {
    type Canvas = DomCanvas;

    /// The container itself if it is a canvas, otherwise its first canvas descendant
    fn find_canvas(&self, container_id: &str) -> Option<DomCanvas> {
        let container = self.document.get_element_by_id(container_id)?;
        let container = match container.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => return Some(DomCanvas(canvas)),
            Err(element) => element,
        };

        let found = container.query_selector("canvas").ok().flatten()?;
        found.dyn_into::<HtmlCanvasElement>().ok().map(DomCanvas)
    }
}

pub struct DomCanvas(HtmlCanvasElement);

impl AttributeSource for DomCanvas {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

impl CanvasElement for DomCanvas {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }
}
