use focus_trap_web::{Features, FocusTrap, dom};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Let the deferred initial-focus microtask and any follow-up focus events run.
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

#[function_component(TwoButtons)]
fn two_buttons() -> Html {
    html! {
        <FocusTrap features={Features::INITIAL_FOCUS}>
            <button id="first">{"First"}</button>
            <button id="second">{"Second"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn initial_focus_lands_on_first_focusable_descendant() {
    yew::Renderer::<TwoButtons>::with_root(mount_host()).render();
    settle().await;
    let active = dom::active_element().expect("an element should hold focus");
    assert_eq!(active.id(), "first");
}

#[function_component(ExplicitTarget)]
fn explicit_target() -> Html {
    let target = use_node_ref();
    html! {
        <FocusTrap features={Features::INITIAL_FOCUS} initial_focus={Some(target.clone())}>
            <button id="first">{"First"}</button>
            <button id="second" ref={target}>{"Second"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn explicit_initial_focus_target_wins_over_first_descendant() {
    yew::Renderer::<ExplicitTarget>::with_root(mount_host()).render();
    settle().await;
    let active = dom::active_element().expect("an element should hold focus");
    assert_eq!(active.id(), "second");
}

#[function_component(AlreadyActive)]
fn already_active() -> Html {
    let target = use_node_ref();
    html! {
        <FocusTrap
            features={Features::INITIAL_FOCUS | Features::FOCUS_LOCK}
            initial_focus={Some(target.clone())}
        >
            <button id="aa-first">{"First"}</button>
            <button id="aa-target" ref={target}>{"Target"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn already_active_target_is_kept_and_recorded() {
    use wasm_bindgen::JsCast;
    let doc = dom::document();
    let outside: web_sys::HtmlElement = doc
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    outside.set_id("aa-outside");
    doc.body().unwrap().append_child(&outside).unwrap();

    let app = yew::Renderer::<AlreadyActive>::with_root(mount_host()).render();
    // Focus the designated target before the deferred decision runs: the
    // trap must keep it rather than move focus anywhere else.
    doc.get_element_by_id("aa-target")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .focus()
        .unwrap();
    settle().await;
    assert_eq!(dom::active_element().unwrap().id(), "aa-target");

    // And it was recorded as the previous-active element: the lock pulls
    // an escape back to it, not to the first focusable descendant.
    outside.focus().unwrap();
    settle().await;
    assert_eq!(dom::active_element().unwrap().id(), "aa-target");
    app.destroy();
}

#[function_component(NothingFocusable)]
fn nothing_focusable() -> Html {
    html! {
        <FocusTrap features={Features::INITIAL_FOCUS}>
            <p>{"Static content only"}</p>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn trap_without_focusable_descendants_leaves_focus_unchanged() {
    use wasm_bindgen::JsCast;
    let doc = dom::document();
    let outside: web_sys::HtmlElement = doc
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    outside.set_id("outside");
    doc.body().unwrap().append_child(&outside).unwrap();
    outside.focus().unwrap();

    yew::Renderer::<NothingFocusable>::with_root(mount_host()).render();
    settle().await;
    let active = dom::active_element().expect("an element should hold focus");
    assert_eq!(active.id(), "outside");
}

#[function_component(DisabledTrap)]
fn disabled_trap() -> Html {
    html! {
        <FocusTrap features={Features::NONE}>
            <button id="first">{"First"}</button>
        </FocusTrap>
    }
}

#[wasm_bindgen_test]
async fn disabled_features_never_move_focus() {
    use wasm_bindgen::JsCast;
    let doc = dom::document();
    let outside: web_sys::HtmlElement = doc
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    outside.set_id("outside-none");
    doc.body().unwrap().append_child(&outside).unwrap();
    outside.focus().unwrap();

    yew::Renderer::<DisabledTrap>::with_root(mount_host()).render();
    settle().await;
    let active = dom::active_element().expect("an element should hold focus");
    assert_eq!(active.id(), "outside-none");
}
