use blog_search_app::{SearchBox, SearchConfig};
use leptos::{
    mount::{mount_to, UnmountHandle},
    prelude::*,
    tachys::view::any_view::AnyViewState,
};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// A mounted search box. Unmounting (or letting JavaScript free the handle)
/// removes its markup, its page click listener and any pending timer.
#[wasm_bindgen]
pub struct SearchWidgetHandle {
    handle: Option<UnmountHandle<AnyViewState>>,
}

#[wasm_bindgen]
impl SearchWidgetHandle {
    pub fn unmount(&mut self) {
        if self.handle.take().is_some() {
            log::info!("search widget unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.handle.is_some()
    }
}

/// Mounts a search box inside the first element matching `selector`.
///
/// `config` is a plain object with any of the `SearchConfig` keys; missing
/// keys, `null` or `undefined` fall back to the defaults.
#[wasm_bindgen]
pub fn mount(selector: &str, config: JsValue) -> Result<SearchWidgetHandle, JsValue> {
    let config: SearchConfig = if config.is_undefined() || config.is_null() {
        SearchConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let parent = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document to mount the search widget in"))?
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches {selector}")))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(JsValue::from)?;

    log::info!("mounting search widget into {selector}");
    let handle = mount_to(parent, move || view! { <SearchBox config /> }.into_any());
    Ok(SearchWidgetHandle {
        handle: Some(handle),
    })
}
