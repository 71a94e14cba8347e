//! Browser entry point for invaderers
//!
//! Finds the game canvas in the page, starts the game on it and exposes the
//! battle operations to script.

mod session;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use session::{Session, SessionError};

#[cfg(target_arch = "wasm32")]
mod exports {
    use std::cell::RefCell;

    use log::LevelFilter;
    use wasm_bindgen::prelude::*;

    use crate::dom::DomHost;
    use crate::logger;
    use crate::session::{Session, SessionError};

    impl From<SessionError> for JsValue {
        fn from(err: SessionError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    thread_local! {
        static SESSION: RefCell<Session> = RefCell::new(Session::new());
    }

    fn with_session<T>(
        f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, JsValue> {
        SESSION
            .with(|session| f(&mut session.borrow_mut()))
            .map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn setup_game(container_id: &str) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);

        let host =
            DomHost::from_window().ok_or_else(|| JsValue::from_str("No document available"))?;
        with_session(|session| session.start(&host, container_id))
    }

    #[wasm_bindgen]
    pub fn reset_game() -> Result<(), JsValue> {
        with_session(|session| session.reset())
    }

    #[wasm_bindgen]
    pub fn settings_json() -> Result<String, JsValue> {
        with_session(|session| session.settings_json())
    }

    #[wasm_bindgen]
    pub fn remaining_ships() -> Result<u32, JsValue> {
        with_session(|session| session.remaining_ships())
            .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
    }

    #[wasm_bindgen]
    pub fn begin_frame() -> Result<(), JsValue> {
        with_session(|session| session.begin_frame())
    }

    #[wasm_bindgen]
    pub fn fire_defender() -> Result<bool, JsValue> {
        with_session(|session| session.fire_defender())
    }

    #[wasm_bindgen]
    pub fn destroy_ship(row: u32, column: u32) -> Result<bool, JsValue> {
        with_session(|session| session.destroy_ship(row as usize, column as usize))
    }
}
