//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use portfolio_content::{reference_items, Language};
use thiserror::Error;

use crate::catalog;
use crate::grid::GridLayout;
use crate::model::{
    DesktopState, DropTarget, IconDragSession, IconSurface, InteractionState, PixelPoint,
    PointerPosition, ResizeEdge, ResizeSession, WindowContent, WindowDragSession, WindowId,
    WindowRecord, WindowSize, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Begin dragging an icon on one of the grids.
    BeginIconDrag {
        /// Grid the icon lives on.
        surface: IconSurface,
        /// Icon being dragged.
        icon_id: String,
        /// Pointer offset from the icon's top-left corner at grab time.
        drag_offset: Option<PixelPoint>,
    },
    /// Recompute the candidate drop cell for the active icon drag.
    UpdateIconDropTarget {
        /// Current pointer position in client coordinates.
        pointer: PointerPosition,
        /// Grid container top-left in client coordinates.
        origin: PixelPoint,
        /// Measured geometry of the grid under the pointer.
        layout: GridLayout,
    },
    /// Drop the dragged icon at the pointer position.
    DropIcon {
        /// Pointer position at release, in client coordinates.
        pointer: PointerPosition,
        /// Grid container top-left in client coordinates.
        origin: PixelPoint,
        /// Measured geometry of the grid under the pointer.
        layout: GridLayout,
    },
    /// Abandon the active icon drag without moving anything.
    EndIconDrag,
    /// Toggle the built-in window with the given slug open or closed.
    ToggleWindow {
        /// Logical content id (`cv` or `references`).
        slug: String,
    },
    /// Close a window by id. The record is retained for reopening.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Open a fresh window for a reference item. Every open mints a new
    /// window, so repeated opens coexist.
    OpenReferenceItem {
        /// Reference slug from the folder grid.
        slug: String,
    },
    /// Replace a window's content payload in place.
    SetWindowContent {
        /// Window whose body changes.
        window_id: WindowId,
        /// New content payload.
        content: WindowContent,
    },
    /// Reposition a window unconditionally (no gesture session required).
    MoveWindow {
        /// Window to reposition.
        window_id: WindowId,
        /// New top-left position.
        position: PixelPoint,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Switch the display language and re-derive all display text.
    SetLanguage {
        /// Language to switch to.
        language: Language,
    },
    /// Dismiss the first-visit tutorial overlay.
    DismissTutorial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the preferred language.
    PersistLanguage(Language),
    /// Remember that the tutorial has been seen.
    PersistTutorialSeen,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The reference slug does not exist in the references table.
    #[error("unknown reference: {slug}")]
    ReferenceNotFound {
        /// The slug that failed to resolve.
        slug: String,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the authoritative transition engine for icon placement,
/// window management, and shell preferences. Gesture update/end actions with
/// no matching active session are ignored rather than rejected, since stray
/// pointer events after a cancelled gesture are routine.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when a window action references a
/// missing window, and [`ReducerError::ReferenceNotFound`] when a reference
/// slug fails to resolve.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::BeginIconDrag {
            surface,
            icon_id,
            drag_offset,
        } => {
            if interaction.window_drag.is_some() || interaction.resizing.is_some() {
                return Ok(effects);
            }
            let Some(icon) = state
                .icons
                .iter_mut()
                .find(|icon| icon.surface == surface && icon.id == icon_id)
            else {
                return Ok(effects);
            };
            icon.drag_offset = drag_offset;
            interaction.icon_drag = Some(IconDragSession {
                surface,
                icon_id,
                drop_target: None,
            });
        }
        DesktopAction::UpdateIconDropTarget {
            pointer,
            origin,
            layout,
        } => {
            if let Some(session) = interaction.icon_drag.as_mut() {
                session.drop_target =
                    resolve_drop_target(state, session.surface, &session.icon_id, pointer, origin, &layout);
            }
        }
        DesktopAction::DropIcon {
            pointer,
            origin,
            layout,
        } => {
            if let Some(session) = interaction.icon_drag.take() {
                let target =
                    resolve_drop_target(state, session.surface, &session.icon_id, pointer, origin, &layout);
                if let Some(target) = target {
                    apply_drop(state, session.surface, &session.icon_id, target);
                }
                clear_drag_offsets(state);
            }
        }
        DesktopAction::EndIconDrag => {
            interaction.icon_drag = None;
            clear_drag_offsets(state);
        }
        DesktopAction::ToggleWindow { slug } => {
            let window = state
                .windows
                .iter_mut()
                .find(|w| w.slug == slug)
                .ok_or(ReducerError::WindowNotFound)?;
            window.is_open = !window.is_open;
        }
        DesktopAction::CloseWindow { window_id } => {
            find_window_mut(state, window_id)?.is_open = false;
        }
        DesktopAction::OpenReferenceItem { slug } => {
            let item = reference_items(state.language)
                .into_iter()
                .find(|item| item.slug == slug)
                .ok_or(ReducerError::ReferenceNotFound { slug })?;
            let window_id = next_window_id(state);
            state
                .windows
                .push(catalog::reference_window_record(window_id, item));
        }
        DesktopAction::SetWindowContent { window_id, content } => {
            find_window_mut(state, window_id)?.content = content;
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            find_window_mut(state, window_id)?.position = position;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if interaction.icon_drag.is_some() || interaction.resizing.is_some() {
                return Ok(effects);
            }
            let position_start = find_window_mut(state, window_id)?.position;
            interaction.window_drag = Some(WindowDragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.window_drag.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                window.position = session.position_start.offset(dx, dy);
            }
        }
        DesktopAction::EndMove => {
            interaction.window_drag = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            if interaction.icon_drag.is_some() || interaction.window_drag.is_some() {
                return Ok(effects);
            }
            let window = find_window_mut(state, window_id)?;
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                position_start: window.position,
                size_start: window.effective_size(),
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let (position, size) = resize_window(
                    session.position_start,
                    session.size_start,
                    session.edge,
                    dx,
                    dy,
                );
                let window = find_window_mut(state, session.window_id)?;
                window.position = position;
                window.size = Some(size);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::SetLanguage { language } => {
            if state.language != language {
                catalog::refresh_language(state, language);
            }
            effects.push(RuntimeEffect::PersistLanguage(language));
        }
        DesktopAction::DismissTutorial => {
            state.tutorial_open = false;
            effects.push(RuntimeEffect::PersistTutorialSeen);
        }
    }
    Ok(effects)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

/// Resolves the grid cell under the pointer.
///
/// The grab offset is deliberately not applied here: the cell is picked by
/// the pointer itself, matching the drop-indicator feedback the user sees.
fn resolve_drop_target(
    state: &DesktopState,
    surface: IconSurface,
    icon_id: &str,
    pointer: PointerPosition,
    origin: PixelPoint,
    layout: &GridLayout,
) -> Option<DropTarget> {
    let rel_x = f64::from(pointer.x - origin.x);
    let rel_y = f64::from(pointer.y - origin.y);
    let cell = layout.cell_at(rel_x, rel_y)?;
    let occupied_by = state
        .occupant(surface, cell, icon_id)
        .map(|icon| icon.id.clone());
    Some(DropTarget { cell, occupied_by })
}

/// Moves the dragged icon to the target cell, swapping with any occupant so
/// no two icons on a surface ever share a cell.
fn apply_drop(state: &mut DesktopState, surface: IconSurface, icon_id: &str, target: DropTarget) {
    let Some(source_cell) = state.icon(surface, icon_id).map(|icon| icon.cell) else {
        return;
    };
    if let Some(occupant_id) = &target.occupied_by {
        if let Some(occupant) = state
            .icons
            .iter_mut()
            .find(|icon| icon.surface == surface && icon.id == *occupant_id)
        {
            occupant.cell = source_cell;
        }
    }
    if let Some(icon) = state
        .icons
        .iter_mut()
        .find(|icon| icon.surface == surface && icon.id == icon_id)
    {
        icon.cell = target.cell;
    }
}

fn clear_drag_offsets(state: &mut DesktopState) {
    for icon in &mut state.icons {
        icon.drag_offset = None;
    }
}

/// Computes the post-resize position and size for a pointer delta.
///
/// East/south handles grow away from the anchored origin. West/north handles
/// shrink the window and shift the origin by the same amount so the opposite
/// edge stays put; once the minimum size is reached, both the size and the
/// origin pin in place no matter how far the pointer travels.
fn resize_window(
    position: PixelPoint,
    size: WindowSize,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (PixelPoint, WindowSize) {
    let mut out_position = position;
    let mut out_size = size;

    if edge.involves_east() {
        out_size.width = (size.width + dx).max(MIN_WINDOW_WIDTH);
    }
    if edge.involves_west() {
        let effective_dx = dx.min(size.width - MIN_WINDOW_WIDTH);
        out_size.width = size.width - effective_dx;
        out_position.x = position.x + effective_dx;
    }
    if edge.involves_south() {
        out_size.height = (size.height + dy).max(MIN_WINDOW_HEIGHT);
    }
    if edge.involves_north() {
        let effective_dy = dy.min(size.height - MIN_WINDOW_HEIGHT);
        out_size.height = size.height - effective_dy;
        out_position.y = position.y + effective_dy;
    }

    (out_position, out_size)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{initial_state, REFERENCES_SLUG, RESUME_SLUG};
    use crate::grid::GridCell;

    fn fixtures() -> (DesktopState, InteractionState) {
        (initial_state(Language::En, false), InteractionState::default())
    }

    fn desktop_layout() -> GridLayout {
        GridLayout::uniform(500.0, 400.0, 4, 3, 10.0, 20.0)
    }

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn begin_icon_drag(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) {
        dispatch(
            state,
            interaction,
            DesktopAction::BeginIconDrag {
                surface: IconSurface::Desktop,
                icon_id: id.to_string(),
                drag_offset: None,
            },
        );
    }

    fn cell_of(state: &DesktopState, surface: IconSurface, id: &str) -> GridCell {
        state.icon(surface, id).expect("icon").cell
    }

    #[test]
    fn drop_on_an_empty_cell_moves_the_icon() {
        let (mut state, mut interaction) = fixtures();
        begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);

        // Cell (1, 2) starts at x = 20 + 2*117.5 = 255, y = 20 + 123.33.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DropIcon {
                pointer: PointerPosition { x: 260, y: 150 },
                origin: PixelPoint { x: 0, y: 0 },
                layout: desktop_layout(),
            },
        );

        assert_eq!(
            cell_of(&state, IconSurface::Desktop, RESUME_SLUG),
            GridCell { row: 1, col: 2 }
        );
        assert_eq!(interaction.icon_drag, None);
    }

    #[test]
    fn drop_on_an_occupied_cell_swaps_the_two_icons() {
        let (mut state, mut interaction) = fixtures();
        let resume_start = cell_of(&state, IconSurface::Desktop, RESUME_SLUG);
        let references_start = cell_of(&state, IconSurface::Desktop, REFERENCES_SLUG);

        begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);
        // Pointer inside the references icon's cell (row 1, col 0).
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DropIcon {
                pointer: PointerPosition { x: 25, y: 150 },
                origin: PixelPoint { x: 0, y: 0 },
                layout: desktop_layout(),
            },
        );

        assert_eq!(cell_of(&state, IconSurface::Desktop, RESUME_SLUG), references_start);
        assert_eq!(cell_of(&state, IconSurface::Desktop, REFERENCES_SLUG), resume_start);
    }

    #[test]
    fn no_two_icons_share_a_cell_after_any_drop() {
        let (mut state, mut interaction) = fixtures();
        let probes = [
            PointerPosition { x: 25, y: 150 },
            PointerPosition { x: 260, y: 150 },
            PointerPosition { x: 25, y: 25 },
            PointerPosition { x: 900, y: 900 },
        ];
        for pointer in probes {
            begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::DropIcon {
                    pointer,
                    origin: PixelPoint { x: 0, y: 0 },
                    layout: desktop_layout(),
                },
            );

            let desktop = state.surface_icons(IconSurface::Desktop);
            for (i, a) in desktop.iter().enumerate() {
                for b in &desktop[i + 1..] {
                    assert_ne!(a.cell, b.cell, "{} and {} collide", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn drop_outside_the_grid_abandons_the_drag() {
        let (mut state, mut interaction) = fixtures();
        let start = cell_of(&state, IconSurface::Desktop, RESUME_SLUG);
        begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DropIcon {
                pointer: PointerPosition { x: -40, y: -40 },
                origin: PixelPoint { x: 0, y: 0 },
                layout: desktop_layout(),
            },
        );

        assert_eq!(cell_of(&state, IconSurface::Desktop, RESUME_SLUG), start);
        assert_eq!(interaction.icon_drag, None);
        assert!(state.icons.iter().all(|icon| icon.drag_offset.is_none()));
    }

    #[test]
    fn drop_target_reports_the_occupying_icon() {
        let (mut state, mut interaction) = fixtures();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                surface: IconSurface::Desktop,
                icon_id: RESUME_SLUG.to_string(),
                drag_offset: Some(PixelPoint { x: 12, y: 9 }),
            },
        );
        assert_eq!(
            state
                .icon(IconSurface::Desktop, RESUME_SLUG)
                .and_then(|icon| icon.drag_offset),
            Some(PixelPoint { x: 12, y: 9 })
        );

        // Pointer inside the references icon's cell.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateIconDropTarget {
                pointer: PointerPosition { x: 25, y: 150 },
                origin: PixelPoint { x: 0, y: 0 },
                layout: desktop_layout(),
            },
        );

        let target = interaction
            .icon_drag
            .as_ref()
            .and_then(|session| session.drop_target.clone())
            .expect("drop target");
        assert_eq!(target.cell, GridCell { row: 1, col: 0 });
        assert_eq!(target.occupied_by, Some(REFERENCES_SLUG.to_string()));
    }

    #[test]
    fn move_window_repositions_without_a_gesture() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[1].id;
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: id,
                position: PixelPoint { x: 400, y: 12 },
            },
        );
        assert_eq!(state.windows[1].position, PixelPoint { x: 400, y: 12 });
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn set_window_content_swaps_the_payload_only() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[0].id;
        let item = reference_items(Language::En)[0].clone();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetWindowContent {
                window_id: id,
                content: WindowContent::Reference(item.clone()),
            },
        );

        assert_eq!(state.windows[0].content, WindowContent::Reference(item));
        assert_eq!(state.windows[0].position, PixelPoint { x: 50, y: 50 });
        assert!(!state.windows[0].is_open);
    }

    #[test]
    fn end_icon_drag_is_idempotent() {
        let (mut state, mut interaction) = fixtures();
        begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);
        dispatch(&mut state, &mut interaction, DesktopAction::EndIconDrag);
        dispatch(&mut state, &mut interaction, DesktopAction::EndIconDrag);
        assert_eq!(interaction.icon_drag, None);
    }

    #[test]
    fn unknown_icon_drag_is_ignored() {
        let (mut state, mut interaction) = fixtures();
        begin_icon_drag(&mut state, &mut interaction, "no-such-icon");
        assert_eq!(interaction.icon_drag, None);
    }

    #[test]
    fn toggle_round_trip_restores_geometry() {
        let (mut state, mut interaction) = fixtures();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow {
                slug: RESUME_SLUG.to_string(),
            },
        );
        let id = state.windows[0].id;
        assert!(state.windows[0].is_open);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 170, y: 30 },
            },
        );
        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );
        assert!(!state.windows[0].is_open);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow {
                slug: RESUME_SLUG.to_string(),
            },
        );
        assert!(state.windows[0].is_open);
        assert_eq!(state.windows[0].position, PixelPoint { x: 220, y: 80 });
    }

    #[test]
    fn toggling_an_unknown_slug_errors() {
        let (mut state, mut interaction) = fixtures();
        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleWindow {
                slug: "missing".to_string(),
            },
        );
        assert_eq!(result, Err(ReducerError::WindowNotFound));
    }

    #[test]
    fn repeated_reference_opens_mint_distinct_windows() {
        let (mut state, mut interaction) = fixtures();
        let slug = "ref-fritjoff-büttner".to_string();
        for _ in 0..2 {
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::OpenReferenceItem { slug: slug.clone() },
            );
        }

        let opened: Vec<_> = state.windows.iter().filter(|w| w.slug == slug).collect();
        assert_eq!(opened.len(), 2);
        assert_ne!(opened[0].id, opened[1].id);
        assert!(opened.iter().all(|w| w.is_open));
        assert_eq!(state.next_window_id, 5);
    }

    #[test]
    fn opening_an_unknown_reference_errors() {
        let (mut state, mut interaction) = fixtures();
        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenReferenceItem {
                slug: "ref-nobody".to_string(),
            },
        );
        assert_eq!(
            result,
            Err(ReducerError::ReferenceNotFound {
                slug: "ref-nobody".to_string()
            })
        );
    }

    #[test]
    fn move_applies_the_pointer_delta_to_the_start_position() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[0].id;
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 400, y: 300 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 360, y: 330 },
            },
        );
        assert_eq!(state.windows[0].position, PixelPoint { x: 10, y: 80 });
        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.window_drag, None);
    }

    #[test]
    fn northwest_resize_grows_and_shifts_the_origin() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[0].id;
        state.windows[0].position = PixelPoint { x: 100, y: 100 };

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::NorthWest,
                pointer: PointerPosition { x: 100, y: 100 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 50, y: 70 },
            },
        );

        assert_eq!(state.windows[0].position, PixelPoint { x: 50, y: 70 });
        assert_eq!(
            state.windows[0].size,
            Some(WindowSize {
                width: 850,
                height: 630
            })
        );
    }

    #[test]
    fn west_resize_pins_size_and_position_at_the_floor() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[0].id;
        state.windows[0].position = PixelPoint { x: 100, y: 100 };
        state.windows[0].size = Some(WindowSize {
            width: 320,
            height: 400,
        });

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::West,
                pointer: PointerPosition { x: 100, y: 300 },
            },
        );
        // Pointer travels 200px right; only 20px of shrink is available.
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );

        assert_eq!(
            state.windows[0].size,
            Some(WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: 400
            })
        );
        assert_eq!(state.windows[0].position, PixelPoint { x: 120, y: 100 });
    }

    #[test]
    fn every_edge_respects_the_minimum_size() {
        for edge in ResizeEdge::ALL {
            let (position, size) = resize_window(
                PixelPoint { x: 100, y: 100 },
                WindowSize::default(),
                edge,
                -5000,
                5000,
            );
            assert!(size.width >= MIN_WINDOW_WIDTH, "{edge:?}");
            assert!(size.height >= MIN_WINDOW_HEIGHT, "{edge:?}");
            // The anchored edges never move.
            if !edge.involves_west() {
                assert_eq!(position.x, 100, "{edge:?}");
            }
            if !edge.involves_north() {
                assert_eq!(position.y, 100, "{edge:?}");
            }
        }
    }

    #[test]
    fn east_resize_grows_without_moving_the_window() {
        let (position, size) = resize_window(
            PixelPoint { x: 40, y: 60 },
            WindowSize::default(),
            ResizeEdge::East,
            125,
            999,
        );
        assert_eq!(position, PixelPoint { x: 40, y: 60 });
        assert_eq!(size, WindowSize { width: 925, height: 600 });
    }

    #[test]
    fn begin_resize_is_ignored_while_an_icon_drag_is_active() {
        let (mut state, mut interaction) = fixtures();
        let id = state.windows[0].id;
        begin_icon_drag(&mut state, &mut interaction, RESUME_SLUG);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::East,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        assert_eq!(interaction.resizing, None);
        assert!(interaction.icon_drag.is_some());
    }

    #[test]
    fn language_switch_emits_a_persist_effect_and_keeps_layout() {
        let (mut state, mut interaction) = fixtures();
        state.icons[0].cell = GridCell { row: 2, col: 2 };

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetLanguage {
                language: Language::Nl,
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::PersistLanguage(Language::Nl)]);
        assert_eq!(state.language, Language::Nl);
        assert_eq!(state.icons[0].cell, GridCell { row: 2, col: 2 });
        assert_eq!(state.windows[1].title, "referenties");
    }

    #[test]
    fn dismissing_the_tutorial_persists_the_flag() {
        let mut state = initial_state(Language::En, true);
        let mut interaction = InteractionState::default();

        let effects = dispatch(&mut state, &mut interaction, DesktopAction::DismissTutorial);

        assert!(!state.tutorial_open);
        assert_eq!(effects, vec![RuntimeEffect::PersistTutorialSeen]);
    }
}
