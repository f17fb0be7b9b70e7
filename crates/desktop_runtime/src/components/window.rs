use leptos::*;
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

use super::{content::WindowContentView, pointer_from_pointer_event, try_set_pointer_capture};
use crate::{
    model::{ResizeEdge, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

/// Accept a gesture only from the primary button / primary touch point.
fn is_primary_gesture(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id && w.is_open)
    });
    let resizing = Signal::derive(move || {
        runtime
            .interaction
            .get()
            .resizing
            .map(|session| session.window_id)
            == Some(window_id)
    });

    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_gesture(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    // Keep a titlebar press on the close button from starting a drag.
    let swallow_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    });

    view! {
        {move || {
            window.get().map(|win| {
                let size = win.effective_size();
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;",
                    win.position.x, win.position.y, size.width, size.height
                );

                view! {
                    <WindowFrame style=style aria_label=win.title.clone() resizing=resizing>
                        <WindowTitleBar on_pointerdown=begin_move>
                            <WindowTitle>
                                <span>{win.title.clone()}</span>
                            </WindowTitle>
                            <WindowControls>
                                <WindowControlButton
                                    aria_label="Close window"
                                    on_pointerdown=swallow_pointerdown
                                    on_click=close
                                >
                                    "\u{00D7}"
                                </WindowControlButton>
                            </WindowControls>
                        </WindowTitleBar>
                        <WindowBody>
                            <WindowContentView content=win.content.clone() />
                        </WindowBody>
                        {ResizeEdge::ALL
                            .into_iter()
                            .map(|edge| {
                                view! { <WindowResizeHandle window_id edge /> }
                            })
                            .collect_view()}
                    </WindowFrame>
                }
            })
        }}
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_gesture(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.slot() on_pointerdown=on_pointerdown /> }
}
