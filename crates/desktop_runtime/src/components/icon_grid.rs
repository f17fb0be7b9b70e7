use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconGrid};

use super::{
    current_target_rect, event_target_rect, parse_drag_payload, pointer_from_drag_event,
    DESKTOP_MIN_TRACK_PX, GRID_GAP_PX, GRID_PADDING_PX,
};
use crate::{
    catalog,
    grid::GridLayout,
    model::{DesktopIcon, IconKind, IconSurface, PixelPoint},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

fn ui_icon_kind(kind: IconKind) -> system_ui::IconKind {
    match kind {
        IconKind::File => system_ui::IconKind::File,
        IconKind::Folder => system_ui::IconKind::Folder,
        IconKind::Reference => system_ui::IconKind::Reference,
    }
}

/// Auto-fill track count for one axis: how many minimum-size tracks plus gaps
/// fit in the padded extent.
fn auto_fill_tracks(extent: f64) -> u32 {
    let usable = extent - GRID_PADDING_PX * 2.0 + GRID_GAP_PX;
    let tracks = (usable / (DESKTOP_MIN_TRACK_PX + GRID_GAP_PX)).floor();
    (tracks as u32).max(1)
}

fn grid_style(surface: IconSurface) -> &'static str {
    match surface {
        // Matches auto_fill_tracks: auto-fill of minmax(min-track, 1fr)
        // divides the content box evenly across however many tracks fit.
        IconSurface::Desktop => {
            "display:grid;height:100%;\
             grid-template-columns:repeat(auto-fill,minmax(120px,1fr));\
             grid-template-rows:repeat(auto-fill,minmax(120px,1fr));\
             gap:10px;padding:20px;"
        }
        IconSurface::Folder => {
            "display:grid;min-height:300px;\
             grid-template-columns:repeat(4,1fr);\
             gap:10px;padding:20px;"
        }
    }
}

#[component]
/// One icon grid surface: the full desktop or the folder mini-desktop.
///
/// Icons are placed with CSS grid row/column from their logical cell, so the
/// rendered layout and the drop-target math share one geometry source.
pub(super) fn IconSurfaceView(
    surface: IconSurface,
    drag_enabled: bool,
    /// Receives the icon id on click (desktop: window slug; folder:
    /// reference slug).
    on_activate: Callback<String>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let icons = Signal::derive(move || runtime.state.get().surface_icons(surface));
    let drop_target = Signal::derive(move || {
        runtime
            .interaction
            .get()
            .icon_drag
            .filter(|session| session.surface == surface)
            .and_then(|session| session.drop_target)
    });

    let layout_for = move |width: f64, height: f64| -> GridLayout {
        match surface {
            IconSurface::Desktop => GridLayout::uniform(
                width,
                height,
                auto_fill_tracks(width),
                auto_fill_tracks(height),
                GRID_GAP_PX,
                GRID_PADDING_PX,
            ),
            IconSurface::Folder => GridLayout::fixed_columns(
                width,
                catalog::FOLDER_COLUMNS,
                catalog::folder_rows(icons.get_untracked().len()),
                GRID_GAP_PX,
                GRID_PADDING_PX,
            ),
        }
    };

    let on_dragover = Callback::new(move |ev: web_sys::DragEvent| {
        if !drag_enabled {
            return;
        }
        ev.prevent_default();
        if let Some((origin, width, height)) = current_target_rect(&ev) {
            runtime.dispatch_action(DesktopAction::UpdateIconDropTarget {
                pointer: pointer_from_drag_event(&ev),
                origin,
                layout: layout_for(width, height),
            });
        }
    });

    let on_drop = Callback::new(move |ev: web_sys::DragEvent| {
        if !drag_enabled {
            return;
        }
        ev.prevent_default();
        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data("text/plain").ok())
            .unwrap_or_default();
        let matches_surface =
            matches!(parse_drag_payload(&payload), Some((s, _)) if s == surface);
        if !matches_surface {
            // Foreign or malformed payload: abandon any in-flight drag.
            runtime.dispatch_action(DesktopAction::EndIconDrag);
            return;
        }
        if let Some((origin, width, height)) = current_target_rect(&ev) {
            runtime.dispatch_action(DesktopAction::DropIcon {
                pointer: pointer_from_drag_event(&ev),
                origin,
                layout: layout_for(width, height),
            });
        } else {
            runtime.dispatch_action(DesktopAction::EndIconDrag);
        }
    });

    let on_dragend = Callback::new(move |_: web_sys::DragEvent| {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
    });

    view! {
        <DesktopIconGrid
            style=grid_style(surface).to_string()
            on_dragover=on_dragover
            on_drop=on_drop
            on_dragend=on_dragend
        >
            <For each=move || icons.get() key=|icon| icon.id.clone() let:icon>
                <SurfaceIcon icon surface drag_enabled on_activate />
            </For>

            {move || {
                drop_target
                    .get()
                    .map(|target| {
                        let occupied = if target.occupied_by.is_some() {
                            "true"
                        } else {
                            "false"
                        };
                        view! {
                            <div
                                class="drop-indicator"
                                data-ui-kind="drop-indicator"
                                data-ui-occupied=occupied
                                style=format!(
                                    "grid-row:{};grid-column:{};",
                                    target.cell.row + 1,
                                    target.cell.col + 1
                                )
                            ></div>
                        }
                    })
            }}
        </DesktopIconGrid>
    }
}

#[component]
fn SurfaceIcon(
    icon: DesktopIcon,
    surface: IconSurface,
    drag_enabled: bool,
    on_activate: Callback<String>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_id = store_value(icon.id.clone());

    let on_click = Callback::new(move |_| {
        on_activate.call(icon_id.get_value());
    });

    let on_dragstart = Callback::new(move |ev: web_sys::DragEvent| {
        if !drag_enabled {
            return;
        }
        let id = icon_id.get_value();
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &format!("{}{id}", surface.payload_prefix()));
        }
        // Measurement failure degrades to offset-free drag tracking.
        let drag_offset = event_target_rect(&ev).map(|rect| PixelPoint {
            x: ev.client_x() - rect.left() as i32,
            y: ev.client_y() - rect.top() as i32,
        });
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            surface,
            icon_id: id,
            drag_offset,
        });
    });

    let on_dragend = Callback::new(move |_: web_sys::DragEvent| {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
    });

    view! {
        <DesktopIconButton
            kind=ui_icon_kind(icon.kind)
            label=icon.title.clone()
            icon_id=icon.id.clone()
            style=format!(
                "grid-row:{};grid-column:{};",
                icon.cell.row + 1,
                icon.cell.col + 1
            )
            draggable=drag_enabled
            on_click=on_click
            on_dragstart=on_dragstart
            on_dragend=on_dragend
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn auto_fill_track_count_matches_the_css_template() {
        // 500px wide, 20px padding, 10px gap: three 120px tracks plus two
        // gaps fit (390px needed), a fourth does not.
        assert_eq!(auto_fill_tracks(500.0), 3);
        assert_eq!(auto_fill_tracks(550.0), 4);
        assert_eq!(auto_fill_tracks(0.0), 1);
    }
}
