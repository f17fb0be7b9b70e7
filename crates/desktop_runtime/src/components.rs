//! Desktop shell UI composition and interaction surfaces.

mod content;
mod folder;
mod icon_grid;
mod loading;
mod tutorial;
mod window;

use leptos::*;
use system_ui::{Button, ButtonVariant, DesktopBackdrop, DesktopWindowLayer};

use self::{icon_grid::IconSurfaceView, tutorial::TutorialOverlay, window::DesktopWindow};
use crate::{
    model::{IconSurface, PointerPosition},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

pub use self::loading::LoadingScreen;

/// Gap between grid cells, mirrored in the rendered grid style so drop math
/// and layout agree.
const GRID_GAP_PX: f64 = 10.0;
/// Symmetric grid container padding, mirrored in the rendered grid style.
const GRID_PADDING_PX: f64 = 20.0;
/// Minimum desktop grid track size for the auto-fill template.
const DESKTOP_MIN_TRACK_PX: f64 = 120.0;

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn pointer_from_drag_event(ev: &web_sys::DragEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Splits a native drag payload into its surface tag and icon id.
///
/// Unknown prefixes yield `None`; callers treat that as a foreign drop and do
/// nothing.
fn parse_drag_payload(payload: &str) -> Option<(IconSurface, &str)> {
    // "folder-icon:" must be probed before "icon:"; the latter is a suffix of
    // the former.
    for surface in [IconSurface::Folder, IconSurface::Desktop] {
        if let Some(id) = payload.strip_prefix(surface.payload_prefix()) {
            if !id.is_empty() {
                return Some((surface, id));
            }
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Bounding box of the event's current target, in client coordinates.
#[cfg(target_arch = "wasm32")]
fn current_target_rect(ev: &web_sys::DragEvent) -> Option<(crate::model::PixelPoint, f64, f64)> {
    use wasm_bindgen::JsCast;
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some((
        crate::model::PixelPoint {
            x: rect.left() as i32,
            y: rect.top() as i32,
        },
        rect.width(),
        rect.height(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn current_target_rect(_: &web_sys::DragEvent) -> Option<(crate::model::PixelPoint, f64, f64)> {
    None
}

/// Bounding box of the event's immediate target (the dragged icon element).
#[cfg(target_arch = "wasm32")]
fn event_target_rect(ev: &web_sys::DragEvent) -> Option<web_sys::DomRect> {
    use wasm_bindgen::JsCast;
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    Some(element.get_bounding_client_rect())
}

#[cfg(not(target_arch = "wasm32"))]
fn event_target_rect(_: &web_sys::DragEvent) -> Option<web_sys::DomRect> {
    None
}

#[component]
/// Renders the full desktop shell: icon grid, window layer, language toggle,
/// and the first-visit tutorial overlay.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Window gestures listen at the shell root so fast pointer movement never
    // escapes the dragged element.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.window_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.window_drag.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::EndResize);
        }
    };

    let language = Signal::derive(move || state.get().language);
    let toggle_language = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::SetLanguage {
            language: language.get_untracked().toggled(),
        });
    });
    let activate_desktop_icon = Callback::new(move |slug: String| {
        runtime.dispatch_action(DesktopAction::ToggleWindow { slug });
    });

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <Button
                layout_class="language-toggle"
                variant=ButtonVariant::Quiet
                aria_label="Switch language"
                on_click=toggle_language
            >
                {move || language.get().code().to_uppercase()}
            </Button>

            <DesktopBackdrop>
                <IconSurfaceView
                    surface=IconSurface::Desktop
                    drag_enabled=true
                    on_activate=activate_desktop_icon
                />

                <DesktopWindowLayer>
                    <For each=move || state.get().windows key=|win| win.id.0 let:win>
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <Show when=move || state.get().tutorial_open fallback=|| ()>
                <TutorialOverlay />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_payloads_round_trip_their_surface_prefix() {
        assert_eq!(
            parse_drag_payload("icon:cv"),
            Some((IconSurface::Desktop, "cv"))
        );
        assert_eq!(
            parse_drag_payload("folder-icon:ref-gertie-de-jong-sinnighe"),
            Some((IconSurface::Folder, "ref-gertie-de-jong-sinnighe"))
        );
    }

    #[test]
    fn malformed_drag_payloads_are_rejected() {
        assert_eq!(parse_drag_payload(""), None);
        assert_eq!(parse_drag_payload("icon:"), None);
        assert_eq!(parse_drag_payload("window:cv"), None);
        assert_eq!(parse_drag_payload("cv"), None);
    }
}
