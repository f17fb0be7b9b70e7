use portfolio_content::{Language, ReferenceItem};
use serde::{Deserialize, Serialize};

use crate::grid::GridCell;

/// Width applied to windows without an explicit size.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Height applied to windows without an explicit size.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Minimum allowed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Unique id for one window record, minted per open and never reused.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A normalized pointer sample in client coordinates. Mouse and touch
/// adapters both reduce to this before reaching the reducer.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A free-form pixel coordinate (window position, drag offset).
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Explicit window dimensions.
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Visual/behavioral category of a desktop icon.
pub enum IconKind {
    File,
    Folder,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Which icon grid an icon lives on. The desktop and the references folder
/// mini-desktop share one store; the surface tag keeps their grids disjoint.
pub enum IconSurface {
    Desktop,
    Folder,
}

impl IconSurface {
    /// Drag payload tag prefix for this surface.
    pub const fn payload_prefix(self) -> &'static str {
        match self {
            Self::Desktop => "icon:",
            Self::Folder => "folder-icon:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One icon at rest on a grid cell, possibly carrying transient drag state.
pub struct DesktopIcon {
    pub id: String,
    pub title: String,
    pub kind: IconKind,
    pub surface: IconSurface,
    /// Logical grid slot; authoritative for rendering.
    pub cell: GridCell,
    /// Pointer-to-icon-origin offset, present only during an active drag.
    pub drag_offset: Option<PixelPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Display payload of a window, re-derived on language change.
pub enum WindowContent {
    /// The combined CV sections.
    Resume,
    /// The references folder mini-desktop.
    ReferenceFolder,
    /// A single professional reference.
    Reference(ReferenceItem),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One managed window. Closed windows are retained (toggled, not removed) so
/// reopening restores position, size, and content.
pub struct WindowRecord {
    pub id: WindowId,
    /// Logical content id; not unique (repeated opens of one reference share
    /// a slug but get distinct [`WindowId`]s).
    pub slug: String,
    pub title: String,
    pub content: WindowContent,
    pub position: PixelPoint,
    /// Explicit size, if the window has been resized; defaults apply when
    /// `None`.
    pub size: Option<WindowSize>,
    pub is_open: bool,
}

impl WindowRecord {
    /// Size used for rendering and resize math.
    pub fn effective_size(&self) -> WindowSize {
        self.size.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window edge or corner being dragged during a resize.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// All edges in handle-rendering order.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::South,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthEast,
        Self::NorthWest,
        Self::North,
        Self::West,
    ];

    pub const fn involves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn involves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn involves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn involves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Stable DOM slot token for the handle element.
    pub const fn slot(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative desktop state: language, icon grids, and window list.
pub struct DesktopState {
    pub language: Language,
    pub next_window_id: u64,
    pub icons: Vec<DesktopIcon>,
    pub windows: Vec<WindowRecord>,
    /// Whether the first-visit tutorial overlay is showing.
    pub tutorial_open: bool,
}

impl DesktopState {
    pub fn icon(&self, surface: IconSurface, icon_id: &str) -> Option<&DesktopIcon> {
        self.icons
            .iter()
            .find(|icon| icon.surface == surface && icon.id == icon_id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Icons at rest on `surface`, for rendering.
    pub fn surface_icons(&self, surface: IconSurface) -> Vec<DesktopIcon> {
        self.icons
            .iter()
            .filter(|icon| icon.surface == surface)
            .cloned()
            .collect()
    }

    /// The icon occupying `cell` on `surface`, excluding `excluding_id`.
    pub fn occupant(
        &self,
        surface: IconSurface,
        cell: GridCell,
        excluding_id: &str,
    ) -> Option<&DesktopIcon> {
        self.icons
            .iter()
            .find(|icon| icon.surface == surface && icon.id != excluding_id && icon.cell == cell)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Candidate drop slot shown while an icon drag is in progress.
pub struct DropTarget {
    pub cell: GridCell,
    /// Id of the icon already at rest on the cell, if any; rendered with a
    /// distinct "occupied" treatment.
    pub occupied_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active icon drag gesture.
pub struct IconDragSession {
    pub surface: IconSurface,
    pub icon_id: String,
    pub drop_target: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window header drag gesture.
pub struct WindowDragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: PixelPoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window resize gesture.
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: PixelPoint,
    pub size_start: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient gesture state. Dragging and resizing are mutually exclusive:
/// begin-actions for one are ignored while the other is active.
pub struct InteractionState {
    pub icon_drag: Option<IconDragSession>,
    pub window_drag: Option<WindowDragSession>,
    pub resizing: Option<ResizeSession>,
}
