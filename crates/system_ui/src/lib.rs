//! Shared UI primitive library for the desktop-style portfolio shell.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the shell CSS layers. Shell surfaces compose these
//! primitives instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer,
    DialogPanel,
    IconGlyph, IconKind, OverlayScrim, ResizeHandle, TerminalLine, TerminalPrompt, TerminalSurface,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
