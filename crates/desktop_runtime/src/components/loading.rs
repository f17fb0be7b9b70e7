#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use leptos::*;
use portfolio_content::Language;
use system_ui::{TerminalLine, TerminalPrompt, TerminalSurface};

/// Command typed out character by character on boot.
const BOOT_COMMAND: &str = "npm run portfolio.exe";
/// Fake shell prompt marker.
const PROMPT: &str = "C:\\Users\\Guest>";
/// Printed when the typed language choice is neither EN nor NL.
const INVALID_SELECTION_LINE: &str =
    "Invalid selection. Please type \"EN\" or \"NL\" / Ongeldige selectie. Typ \"EN\" of \"NL\"";

#[cfg(target_arch = "wasm32")]
const TYPE_INTERVAL: Duration = Duration::from_millis(100);
#[cfg(target_arch = "wasm32")]
const OUTPUT_INTERVAL: Duration = Duration::from_millis(400);
#[cfg(target_arch = "wasm32")]
const CURSOR_INTERVAL: Duration = Duration::from_millis(500);
/// Pause between the confirmation line and handing over to the desktop.
#[cfg(target_arch = "wasm32")]
const HANDOVER_DELAY: Duration = Duration::from_millis(1000);

/// Staged boot output shown after the command finishes typing.
fn boot_output_lines() -> &'static [&'static str] {
    &[
        "Loading dependencies: React, TypeScript, Vite...",
        "Compiling modules: UI, Projects, Experience, Skills...",
        "Bundling assets and resources...",
        "Starting development server...",
        "Portfolio ready! Compiled successfully in 1.2s",
        "Please select your preferred language / Selecteer uw voorkeurstaal:",
        "Type \"EN\" for English / Type \"NL\" voor Nederlands",
    ]
}

fn confirmation_line(language: Language) -> &'static str {
    match language {
        Language::En => "Language set to English / Taal ingesteld op Engels",
        Language::Nl => "Language set to Dutch / Taal ingesteld op Nederlands",
    }
}

#[component]
/// First-visit boot screen: a fake terminal that types out the launch
/// command, prints staged output, and asks for a language before handing
/// control to the desktop.
pub fn LoadingScreen(
    /// Called once with the committed language choice.
    on_complete: Callback<Language>,
) -> impl IntoView {
    let typed_chars = create_rw_signal(0usize);
    let shown_lines = create_rw_signal(0usize);
    let cursor_on = create_rw_signal(true);
    let input = create_rw_signal(String::new());
    let feedback_lines = create_rw_signal(Vec::<&'static str>::new());
    let committed = create_rw_signal(false);

    let prompt_active = Signal::derive(move || shown_lines.get() >= boot_output_lines().len());

    #[cfg(target_arch = "wasm32")]
    {
        let typing_handle = store_value(None::<IntervalHandle>);
        let output_handle = store_value(None::<IntervalHandle>);

        // Phase one types the command; once done it hands over to the slower
        // output-reveal interval.
        let typing = set_interval_with_handle(
            move || {
                if typed_chars.get_untracked() < BOOT_COMMAND.len() {
                    typed_chars.update(|n| *n += 1);
                    return;
                }
                if let Some(handle) = typing_handle.get_value() {
                    handle.clear();
                    typing_handle.set_value(None);
                }
                if output_handle.get_value().is_none() {
                    if let Ok(handle) = set_interval_with_handle(
                        move || {
                            if shown_lines.get_untracked() < boot_output_lines().len() {
                                shown_lines.update(|n| *n += 1);
                            }
                        },
                        OUTPUT_INTERVAL,
                    ) {
                        output_handle.set_value(Some(handle));
                    }
                }
            },
            TYPE_INTERVAL,
        );
        if let Ok(handle) = typing {
            typing_handle.set_value(Some(handle));
        }

        let blink = set_interval_with_handle(
            move || cursor_on.update(|on| *on = !*on),
            CURSOR_INTERVAL,
        );

        on_cleanup(move || {
            if let Some(handle) = typing_handle.get_value() {
                handle.clear();
            }
            if let Some(handle) = output_handle.get_value() {
                handle.clear();
            }
            if let Ok(handle) = blink {
                handle.clear();
            }
        });
    }

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !prompt_active.get_untracked() || committed.get_untracked() {
            return;
        }
        let key = ev.key();
        if key == "Enter" {
            match Language::parse(&input.get_untracked()) {
                Some(language) => {
                    committed.set(true);
                    feedback_lines.update(|lines| lines.push(confirmation_line(language)));
                    // Leave the confirmation visible for a beat before switching.
                    #[cfg(target_arch = "wasm32")]
                    set_timeout(move || on_complete.call(language), HANDOVER_DELAY);
                    #[cfg(not(target_arch = "wasm32"))]
                    on_complete.call(language);
                }
                None => {
                    feedback_lines.update(|lines| lines.push(INVALID_SELECTION_LINE));
                    input.set(String::new());
                }
            }
        } else if key == "Backspace" {
            input.update(|value| {
                value.pop();
            });
        } else if key.len() == 1 && key.chars().all(|c| c.is_ascii_alphabetic()) {
            input.update(|value| {
                if value.len() < 2 {
                    value.push_str(&key);
                }
            });
        }
    };

    let typed_command = move || BOOT_COMMAND[..typed_chars.get().min(BOOT_COMMAND.len())].to_string();
    let command_cursor = move || {
        (cursor_on.get() && !prompt_active.get()).then(|| view! { <span class="cursor">"_"</span> })
    };
    let input_cursor =
        move || cursor_on.get().then(|| view! { <span class="cursor">"_"</span> });

    view! {
        <div class="loading-screen" tabindex="0" autofocus on:keydown=on_keydown>
            <TerminalSurface title="Command Prompt">
                <TerminalPrompt prompt=PROMPT>
                    <span class="command">{typed_command}</span>
                    {command_cursor}
                </TerminalPrompt>

                {move || {
                    boot_output_lines()[..shown_lines.get()]
                        .iter()
                        .map(|line| view! { <TerminalLine>{*line}</TerminalLine> })
                        .collect_view()
                }}
                {move || {
                    feedback_lines
                        .get()
                        .into_iter()
                        .map(|line| view! { <TerminalLine>{line}</TerminalLine> })
                        .collect_view()
                }}

                <Show
                    when=move || prompt_active.get() && !committed.get()
                    fallback=|| ()
                >
                    <TerminalPrompt prompt=PROMPT>
                        <span class="command">{move || input.get()}</span>
                        {input_cursor}
                    </TerminalPrompt>
                </Show>
            </TerminalSurface>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boot_output_ends_with_the_language_prompt() {
        let lines = boot_output_lines();
        assert_eq!(lines.len(), 7);
        assert!(lines[lines.len() - 1].contains("\"EN\""));
        assert!(lines[lines.len() - 1].contains("\"NL\""));
    }

    #[test]
    fn confirmation_lines_are_bilingual() {
        assert!(confirmation_line(Language::En).contains("English"));
        assert!(confirmation_line(Language::Nl).contains("Nederlands"));
    }

    #[test]
    fn typed_input_parses_case_insensitively() {
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("nl"), Some(Language::Nl));
        assert_eq!(Language::parse("xx"), None);
    }
}
