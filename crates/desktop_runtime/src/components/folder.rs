use leptos::*;

use super::icon_grid::IconSurfaceView;
use crate::{model::IconSurface, reducer::DesktopAction, runtime_context::use_desktop_runtime};

#[component]
/// The references folder body: a fixed four-column mini-desktop.
///
/// Clicking an item opens its window at the desktop level; the folder itself
/// never owns windows. Icon dragging is disabled inside folders.
pub(super) fn FolderView() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let open_reference = Callback::new(move |slug: String| {
        runtime.dispatch_action(DesktopAction::OpenReferenceItem { slug });
    });

    view! {
        <div class="folder-view">
            <IconSurfaceView
                surface=IconSurface::Folder
                drag_enabled=false
                on_activate=open_reference
            />
        </div>
    }
}
