//! The `FocusTrap` component.
//!
//! Renders its children inside a root `<div>` and, depending on the enabled
//! [`Features`], brackets them with boundary sentinels, installs a
//! document-level focus lock, moves focus inside on activation, and restores
//! the pre-trap focus on teardown.

use focus_trap_core::Features;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::containers::ExtraContainers;
use crate::dom;
use crate::trap::{self, TrapState};

/// Inline sentinel style: focusable but invisible and out of layout, the
/// same screen-reader-only recipe used for visually hidden helpers.
const GUARD_STYLE: &str = "position:absolute;width:1px;height:1px;margin:-1px;padding:0;border:0;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Candidate element to receive focus when the trap activates.
    #[prop_or_default]
    pub initial_focus: Option<NodeRef>,
    /// Feature bitmask; every manager is enabled by default.
    #[prop_or(Features::ALL)]
    pub features: Features,
    /// Externally owned extra containers treated as part of the trap.
    #[prop_or_default]
    pub containers: ExtraContainers,
    /// Exposes the trap's root element to composing collaborators.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FocusTrap)]
pub fn focus_trap(props: &Props) -> Html {
    let shared = use_mut_ref(|| {
        TrapState::new(
            props.node_ref.clone(),
            props.containers.clone(),
            props.features,
        )
    });

    // Keep externally owned inputs fresh and drive the RestoreFocus edge.
    // Capturing the restore point here, synchronously after render, wins the
    // race against the initial-focus move scheduled a microtask later.
    {
        let shared = shared.clone();
        use_effect_with(
            (
                props.node_ref.clone(),
                props.features,
                props.containers.clone(),
            ),
            move |(node_ref, features, containers)| {
                trap::configure(&shared, node_ref.clone(), *features, containers.clone());
                if cfg!(target_arch = "wasm32") {
                    trap::evaluate_restore_flag(&shared);
                }
                || {}
            },
        );
    }

    // Initial focus: re-decide whenever the container, the caller-specified
    // target, or the enable flag changes.
    {
        let shared = shared.clone();
        let target = props.initial_focus.clone();
        use_effect_with(
            (
                props.node_ref.clone(),
                props.initial_focus.clone(),
                props.features.contains(Features::INITIAL_FOCUS),
            ),
            move |(_, _, enabled)| {
                if *enabled && cfg!(target_arch = "wasm32") {
                    trap::schedule_initial_focus(&shared, target);
                }
                || {}
            },
        );
    }

    // Focus lock: capturing listener at the document view level, so even
    // programmatic `.focus()` calls elsewhere in the page are intercepted.
    {
        let shared = shared.clone();
        use_effect_with(
            props.features.contains(Features::FOCUS_LOCK),
            move |enabled| {
                let mut listener: Option<Closure<dyn FnMut(web_sys::Event)>> = None;
                if *enabled && cfg!(target_arch = "wasm32") {
                    let shared = shared.clone();
                    let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
                        trap::on_document_focusin(&shared, &event);
                    })
                        as Box<dyn FnMut(web_sys::Event)>);
                    let _ = dom::document().add_event_listener_with_callback_and_bool(
                        "focusin",
                        callback.as_ref().unchecked_ref(),
                        true,
                    );
                    listener = Some(callback);
                }
                move || {
                    if let Some(callback) = listener {
                        let _ = dom::document().remove_event_listener_with_callback_and_bool(
                            "focusin",
                            callback.as_ref().unchecked_ref(),
                            true,
                        );
                    }
                }
            },
        );
    }

    // Teardown: abort pending deferred work and restore the captured focus.
    {
        let shared = shared.clone();
        use_effect_with((), move |_| {
            move || trap::destroy(&shared);
        });
    }

    let onkeydown = {
        let shared = shared.clone();
        Callback::from(move |event: KeyboardEvent| trap::on_root_keydown(&shared, &event))
    };
    let onfocusout = {
        let shared = shared.clone();
        Callback::from(move |event: FocusEvent| trap::on_root_focusout(&shared, &event))
    };
    let on_guard_focus = {
        let shared = shared.clone();
        Callback::from(move |event: FocusEvent| trap::on_guard_focus(&shared, &event))
    };

    let tab_lock = props.features.contains(Features::TAB_LOCK);
    html! {
        <>
            if tab_lock {
                <span
                    tabindex="0"
                    aria-hidden="true"
                    data-focus-guard="start"
                    style={GUARD_STYLE}
                    onfocus={on_guard_focus.clone()}
                />
            }
            <div class="focus-trap" ref={props.node_ref.clone()} {onkeydown} {onfocusout}>
                { for props.children.iter() }
            </div>
            if tab_lock {
                <span
                    tabindex="0"
                    aria-hidden="true"
                    data-focus-guard="end"
                    style={GUARD_STYLE}
                    onfocus={on_guard_focus}
                />
            }
        </>
    }
}
