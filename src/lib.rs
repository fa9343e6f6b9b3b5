mod api;
mod app;
mod components;
mod error;
mod format;
mod session;
mod test_session;
mod types;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document not available");
    let root = document
        .get_element_by_id("root")
        .expect("missing #root element");
    yew::Renderer::<app::App>::with_root(root).render();
}
