//! Built-in desktop catalog: the icons and windows that exist on boot, and the
//! language refresh that re-derives their display text.

use portfolio_content::{reference_items, Language, ReferenceItem};

use crate::grid::GridCell;
use crate::model::{
    DesktopIcon, DesktopState, IconKind, IconSurface, PixelPoint, WindowContent, WindowRecord,
    WindowId,
};

/// Logical id of the resume icon/window pair.
pub const RESUME_SLUG: &str = "cv";
/// Logical id of the references folder icon/window pair.
pub const REFERENCES_SLUG: &str = "references";

/// Column count of the references folder grid.
pub const FOLDER_COLUMNS: u32 = 4;

/// Minimum row count rendered in the folder grid, even when mostly empty.
pub const FOLDER_MIN_ROWS: u32 = 4;

fn resume_title(_language: Language) -> String {
    "resume.txt".to_string()
}

fn references_title(language: Language) -> String {
    match language {
        Language::En => "references".to_string(),
        Language::Nl => "referenties".to_string(),
    }
}

/// Desktop icons in their default cells.
pub fn desktop_icons(language: Language) -> Vec<DesktopIcon> {
    vec![
        DesktopIcon {
            id: RESUME_SLUG.to_string(),
            title: resume_title(language),
            kind: IconKind::File,
            surface: IconSurface::Desktop,
            cell: GridCell { row: 0, col: 0 },
            drag_offset: None,
        },
        DesktopIcon {
            id: REFERENCES_SLUG.to_string(),
            title: references_title(language),
            kind: IconKind::Folder,
            surface: IconSurface::Desktop,
            cell: GridCell { row: 1, col: 0 },
            drag_offset: None,
        },
    ]
}

/// Folder icons for each reference, filled row-major across the fixed columns.
pub fn folder_icons(language: Language) -> Vec<DesktopIcon> {
    reference_items(language)
        .into_iter()
        .enumerate()
        .map(|(index, item)| DesktopIcon {
            id: item.slug,
            title: item.name,
            kind: IconKind::Reference,
            surface: IconSurface::Folder,
            cell: GridCell {
                row: index as u32 / FOLDER_COLUMNS,
                col: index as u32 % FOLDER_COLUMNS,
            },
            drag_offset: None,
        })
        .collect()
}

/// Row count the folder grid renders for `icon_count` icons.
pub fn folder_rows(icon_count: usize) -> u32 {
    let needed = (icon_count as u32).div_ceil(FOLDER_COLUMNS);
    needed.max(FOLDER_MIN_ROWS)
}

fn initial_windows(language: Language) -> Vec<WindowRecord> {
    vec![
        WindowRecord {
            id: WindowId(1),
            slug: RESUME_SLUG.to_string(),
            title: resume_title(language),
            content: WindowContent::Resume,
            position: PixelPoint { x: 50, y: 50 },
            size: None,
            is_open: false,
        },
        WindowRecord {
            id: WindowId(2),
            slug: REFERENCES_SLUG.to_string(),
            title: references_title(language),
            content: WindowContent::ReferenceFolder,
            position: PixelPoint { x: 100, y: 100 },
            size: None,
            is_open: false,
        },
    ]
}

/// The desktop as it exists before any interaction.
pub fn initial_state(language: Language, tutorial_open: bool) -> DesktopState {
    let mut icons = desktop_icons(language);
    icons.extend(folder_icons(language));
    DesktopState {
        language,
        next_window_id: 3,
        icons,
        windows: initial_windows(language),
        tutorial_open,
    }
}

/// Window record for a freshly opened reference item.
pub fn reference_window_record(id: WindowId, item: ReferenceItem) -> WindowRecord {
    WindowRecord {
        id,
        slug: item.slug.clone(),
        title: item.name.clone(),
        content: WindowContent::Reference(item),
        position: PixelPoint { x: 150, y: 150 },
        size: None,
        is_open: true,
    }
}

/// Re-derives all language-dependent display text in place.
///
/// Icon cells, window geometry, and open/closed flags are user state and must
/// survive the switch; only titles and reference payloads change.
pub fn refresh_language(state: &mut DesktopState, language: Language) {
    state.language = language;

    let items = reference_items(language);
    for icon in &mut state.icons {
        match icon.surface {
            IconSurface::Desktop => {
                if icon.id == RESUME_SLUG {
                    icon.title = resume_title(language);
                } else if icon.id == REFERENCES_SLUG {
                    icon.title = references_title(language);
                }
            }
            IconSurface::Folder => {
                if let Some(item) = items.iter().find(|item| item.slug == icon.id) {
                    icon.title = item.name.clone();
                }
            }
        }
    }

    for window in &mut state.windows {
        match &window.content {
            WindowContent::Resume => window.title = resume_title(language),
            WindowContent::ReferenceFolder => window.title = references_title(language),
            WindowContent::Reference(current) => {
                if let Some(item) = items.iter().find(|item| item.slug == current.slug) {
                    window.title = item.name.clone();
                    window.content = WindowContent::Reference(item.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_state_places_builtin_icons_in_the_first_column() {
        let state = initial_state(Language::En, false);
        let desktop = state.surface_icons(IconSurface::Desktop);
        assert_eq!(desktop.len(), 2);
        assert_eq!(desktop[0].id, RESUME_SLUG);
        assert_eq!(desktop[0].cell, GridCell { row: 0, col: 0 });
        assert_eq!(desktop[1].id, REFERENCES_SLUG);
        assert_eq!(desktop[1].cell, GridCell { row: 1, col: 0 });
    }

    #[test]
    fn folder_icons_fill_rows_left_to_right() {
        let icons = folder_icons(Language::Nl);
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].cell, GridCell { row: 0, col: 0 });
        assert_eq!(icons[1].cell, GridCell { row: 0, col: 1 });
        assert!(icons.iter().all(|icon| icon.kind == IconKind::Reference));
    }

    #[test]
    fn folder_grid_keeps_a_minimum_height() {
        assert_eq!(folder_rows(0), 4);
        assert_eq!(folder_rows(2), 4);
        assert_eq!(folder_rows(17), 5);
    }

    #[test]
    fn builtin_windows_start_closed_with_staggered_positions() {
        let state = initial_state(Language::Nl, false);
        assert_eq!(state.windows.len(), 2);
        assert!(state.windows.iter().all(|w| !w.is_open));
        assert_eq!(state.windows[0].position, PixelPoint { x: 50, y: 50 });
        assert_eq!(state.windows[1].position, PixelPoint { x: 100, y: 100 });
        assert_eq!(state.next_window_id, 3);
    }

    #[test]
    fn language_refresh_keeps_user_state() {
        let mut state = initial_state(Language::Nl, false);
        state.icons[1].cell = GridCell { row: 2, col: 3 };
        state.windows[0].is_open = true;
        state.windows[0].position = PixelPoint { x: 320, y: 40 };

        refresh_language(&mut state, Language::En);

        assert_eq!(state.language, Language::En);
        assert_eq!(state.icons[1].title, "references");
        assert_eq!(state.icons[1].cell, GridCell { row: 2, col: 3 });
        assert!(state.windows[0].is_open);
        assert_eq!(state.windows[0].position, PixelPoint { x: 320, y: 40 });

        refresh_language(&mut state, Language::Nl);
        assert_eq!(state.icons[1].title, "referenties");
    }

    #[test]
    fn language_refresh_swaps_reference_window_payloads() {
        let mut state = initial_state(Language::En, false);
        let item = reference_items(Language::En).remove(0);
        let slug = item.slug.clone();
        state
            .windows
            .push(reference_window_record(WindowId(3), item));

        refresh_language(&mut state, Language::Nl);

        let window = state.windows.last().unwrap();
        match &window.content {
            WindowContent::Reference(payload) => assert_eq!(payload.slug, slug),
            other => panic!("unexpected content: {other:?}"),
        }
    }
}
