//! Structural primitives for the desktop shell, window chrome, and the boot
//! terminal.

use leptos::ev::{DragEvent, MouseEvent};
use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual categories for desktop icons.
pub enum IconKind {
    /// A plain document icon.
    File,
    /// A folder icon that opens a nested view.
    Folder,
    /// A person/reference icon shown inside folders.
    Reference,
}

impl Default for IconKind {
    fn default() -> Self {
        Self::File
    }
}

impl IconKind {
    /// Stable DOM token for styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Reference => "reference",
        }
    }

    /// Display glyph for the icon image slot.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::File => "\u{1F4C4}",
            Self::Folder => "\u{1F4C1}",
            Self::Reference => "\u{1F464}",
        }
    }
}

#[component]
/// Glyph image slot used inside desktop icon buttons.
pub fn IconGlyph(kind: IconKind) -> impl IntoView {
    view! {
        <span
            class="ui-icon-glyph"
            data-ui-primitive="true"
            data-ui-kind="icon-glyph"
            data-ui-variant=kind.token()
            aria-hidden="true"
        >
            {kind.glyph()}
        </span>
    }
}

#[component]
/// One desktop icon: glyph plus label, placed on a grid cell by the caller's
/// `style` (grid-row/grid-column).
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    kind: IconKind,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] icon_id: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dragstart: Option<Callback<DragEvent>>,
    #[prop(optional)] on_dragend: Option<Callback<DragEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon"
            data-ui-variant=kind.token()
            data-icon-id=move || icon_id.get()
            style=move || style.get()
            draggable=move || bool_token(draggable.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dragstart=move |ev| {
                if let Some(on_dragstart) = on_dragstart.as_ref() {
                    on_dragstart.call(ev);
                }
            }
            on:dragend=move |ev| {
                if let Some(on_dragend) = on_dragend.as_ref() {
                    on_dragend.call(ev);
                }
            }
        >
            <IconGlyph kind=kind />
            <span data-ui-slot="icon-label">{move || label.get()}</span>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Quiet chrome/control button.
    Quiet,
    /// Accent/emphasized button.
    Accent,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
            Self::Accent => "accent",
        }
    }
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Desktop backdrop layer hosting the icon grid and window layer.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid container.
///
/// The grid template is supplied by the caller so the full desktop (auto-fill
/// tracks) and the folder mini-desktop (fixed four columns) share one
/// primitive. Drag-over/drop handlers are forwarded so the shell can run icon
/// drop-target math against this element's geometry.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_dragover: Option<Callback<DragEvent>>,
    #[prop(optional)] on_drop: Option<Callback<DragEvent>>,
    #[prop(optional)] on_dragend: Option<Callback<DragEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
            style=move || style.get()
            node_ref=node_ref
            on:dragover=move |ev| {
                if let Some(on_dragover) = on_dragover.as_ref() {
                    on_dragover.call(ev);
                }
            }
            on:drop=move |ev| {
                if let Some(on_drop) = on_drop.as_ref() {
                    on_drop.call(ev);
                }
            }
            on:dragend=move |ev| {
                if let Some(on_dragend) = on_dragend.as_ref() {
                    on_dragend.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Stacking layer for open windows.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] resizing: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-resizing=move || bool_token(resizing.get())
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar control button.
pub fn WindowControlButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-control"
            aria-label=move || aria_label.get()
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared resize handle primitive for one window edge or corner.
pub fn ResizeHandle(
    /// Edge slot token (`n`, `s`, `e`, `w`, `ne`, `nw`, `se`, `sw`).
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            aria-hidden="true"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Shared terminal surface used by the boot/loading screen.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
        >
            <div class="ui-terminal-titlebar" data-ui-slot="terminal-title">
                {move || title.get()}
            </div>
            <div class="ui-terminal-content" data-ui-slot="terminal-content">
                {children()}
            </div>
        </div>
    }
}

#[component]
/// One output line inside a terminal surface.
pub fn TerminalLine(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-line"
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
        >
            {children()}
        </div>
    }
}

#[component]
/// Prompt row (prompt marker plus typed input) inside a terminal surface.
pub fn TerminalPrompt(
    #[prop(into)] prompt: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-prompt"
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            <span data-ui-slot="prompt-marker">{move || prompt.get()}</span>
            {children()}
        </div>
    }
}

#[component]
/// Full-viewport scrim behind modal overlays.
pub fn OverlayScrim(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-overlay-scrim", layout_class)
            data-ui-primitive="true"
            data-ui-kind="overlay-scrim"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Centered dialog panel used by the tutorial overlay.
pub fn DialogPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-dialog-panel", layout_class)
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="dialog-panel"
            on:click=|ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}
