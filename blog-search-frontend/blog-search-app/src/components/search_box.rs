use crate::{
    components::search_results::PanelContents,
    config::SearchConfig,
    widget::{KeyAction, SearchWidget},
};
use leptos::{ev, html::Input, prelude::*};

#[cfg(feature = "hydrate")]
use crate::{
    api,
    widget::{DebounceTicket, InputAction},
};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use leptos::task::spawn_local;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// The window click listener and any pending debounce timer are released
/// when the component is disposed.
#[component]
pub fn SearchBox(#[prop(optional)] config: Option<SearchConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let text_input = NodeRef::<Input>::new();
    let widget = RwSignal::new(SearchWidget::new(config.clone()));

    // dropping the Timeout cancels it
    #[cfg(feature = "hydrate")]
    let debounce = StoredValue::new_local(None::<Timeout>);

    #[cfg(feature = "hydrate")]
    {
        let wrapper = config.wrapper_selector();
        let handle = window_event_listener(ev::click, move |e| {
            let inside = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest(&wrapper).ok().flatten())
                .is_some();
            // most page clicks change nothing; only repaint when one hid the panel
            if widget.try_update_untracked(|w| w.click(inside)) == Some(true) {
                widget.notify();
            }
        });
        on_cleanup(move || {
            handle.remove();
            debounce.try_update_value(|timer| timer.take());
        });
    }

    let on_input = move |e: ev::Event| {
        let value = event_target_value(&e);
        let action = widget.try_update(|w| w.input(&value));
        #[cfg(feature = "hydrate")]
        {
            let timer = match action {
                Some(InputAction::Debounce { ticket, delay }) => {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Some(Timeout::new(millis, move || dispatch(widget, ticket)))
                }
                _ => None,
            };
            debounce.set_value(timer);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    };

    let on_keydown = move |e: ev::KeyboardEvent| {
        if widget.try_update(|w| w.key_down(&e.key())) == Some(KeyAction::DismissAndBlur) {
            if let Some(input) = text_input.get_untracked() {
                let _ = input.blur();
            }
        }
    };

    let visible = move || widget.with(|w| w.panel().is_visible());
    let contents = move || {
        widget.with(|w| {
            view! {
                <PanelContents content=w.panel().content().clone() config=w.config().clone() />
            }
        })
    };

    view! {
        <div class=config.wrapper_class.clone()>
            <input
                node_ref=text_input
                id=config.input_id.clone()
                type="search"
                autocomplete="off"
                placeholder=config.placeholder.clone()
                on:input=on_input
                on:keydown=on_keydown
            />
            <div
                id=config.results_id.clone()
                class="search-results"
                style:display=move || if visible() { "block" } else { "none" }
            >
                {contents}
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn dispatch(widget: RwSignal<SearchWidget>, ticket: DebounceTicket) {
    let Some(request) = widget
        .try_update_untracked(|w| w.debounce_elapsed(ticket))
        .flatten()
    else {
        return;
    };
    let Some(endpoint) = widget.try_with_untracked(|w| w.config().endpoint.clone()) else {
        return;
    };
    spawn_local(async move {
        let outcome = api::search_posts(&endpoint, &request.query).await;
        // the widget may have been unmounted while the request was in flight
        widget.try_update(|w| w.complete(&request, outcome));
    });
}
