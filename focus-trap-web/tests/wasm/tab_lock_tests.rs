use focus_trap_web::{Features, FocusTrap, dom};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, KeyboardEvent};
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

async fn settle() {
    let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::UNDEFINED)).await;
    let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::UNDEFINED)).await;
}

fn mount_host() -> web_sys::Element {
    let doc = dom::document();
    let host = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

fn by_id(id: &str) -> web_sys::HtmlElement {
    dom::document()
        .get_element_by_id(id)
        .expect("element should exist")
        .dyn_into()
        .unwrap()
}

fn dispatch_tab(el: &web_sys::Element, shift: bool) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Tab");
    init.set_code("Tab");
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

fn guard(host: &web_sys::Element, end: &str) -> web_sys::HtmlElement {
    host.query_selector(&format!("[data-focus-guard='{end}']"))
        .unwrap()
        .expect("guard should render")
        .dyn_into()
        .unwrap()
}

#[function_component(WrapTrap)]
fn wrap_trap() -> Html {
    html! {
        <FocusTrap features={Features::INITIAL_FOCUS | Features::TAB_LOCK}>
            <button id="wrap-first">{"First"}</button>
            <button id="wrap-middle">{"Middle"}</button>
            <button id="wrap-last">{"Last"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn tab_past_the_last_element_wraps_to_the_first() {
    let host = mount_host();
    let app = yew::Renderer::<WrapTrap>::with_root(host.clone()).render();
    settle().await;

    let last = by_id("wrap-last");
    last.focus().unwrap();
    let root = host.query_selector(".focus-trap").unwrap().unwrap();

    // A forward Tab from the last button lands on the end sentinel, which
    // must bounce focus to the first focusable descendant.
    dispatch_tab(&root, false);
    guard(&host, "end").focus().unwrap();
    assert_eq!(dom::active_element().unwrap().id(), "wrap-first");
    app.destroy();
}

#[wasm_bindgen_test]
async fn shift_tab_past_the_first_element_wraps_to_the_last() {
    let host = mount_host();
    let app = yew::Renderer::<WrapTrap>::with_root(host.clone()).render();
    settle().await;

    by_id("wrap-first").focus().unwrap();
    let root = host.query_selector(".focus-trap").unwrap().unwrap();

    dispatch_tab(&root, true);
    guard(&host, "start").focus().unwrap();
    assert_eq!(dom::active_element().unwrap().id(), "wrap-last");
    app.destroy();
}

#[wasm_bindgen_test]
async fn guard_redirect_skips_the_element_that_lost_focus() {
    let host = mount_host();
    let app = yew::Renderer::<WrapTrap>::with_root(host.clone()).render();
    settle().await;

    // Simulate the browser carrying relatedTarget along with the wrap.
    let first = by_id("wrap-first");
    first.focus().unwrap();
    let root = host.query_selector(".focus-trap").unwrap().unwrap();
    dispatch_tab(&root, false);

    let init = web_sys::FocusEventInit::new();
    init.set_related_target(Some(first.as_ref()));
    let event =
        web_sys::FocusEvent::new_with_focus_event_init_dict("focus", &init).unwrap();
    let target: EventTarget = guard(&host, "end").clone().into();
    let _ = target.dispatch_event(&event);

    // The redirect must not pick wrap-first even though it is the first
    // focusable descendant; the next candidate is wrap-middle.
    assert_eq!(dom::active_element().unwrap().id(), "wrap-middle");
    app.destroy();
}

#[function_component(GuardlessTrap)]
fn guardless_trap() -> Html {
    html! {
        <FocusTrap features={Features::NONE}>
            <button id="guardless-btn">{"Button"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn disabled_trap_renders_no_guards() {
    let host = mount_host();
    let app = yew::Renderer::<GuardlessTrap>::with_root(host.clone()).render();
    settle().await;
    assert!(
        host.query_selector("[data-focus-guard]")
            .unwrap()
            .is_none()
    );
    app.destroy();
}
