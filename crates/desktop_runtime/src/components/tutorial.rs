use leptos::*;
use portfolio_content::Language;
use system_ui::{Button, ButtonVariant, DialogPanel, OverlayScrim};

use crate::{reducer::DesktopAction, runtime_context::use_desktop_runtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One page of the first-visit walkthrough.
struct TutorialStep {
    title: &'static str,
    content: &'static str,
}

fn tutorial_steps(language: Language) -> &'static [TutorialStep] {
    match language {
        Language::En => &[
            TutorialStep {
                title: "Welcome to my Portfolio!",
                content: "This is an interactive desktop-style portfolio. Let me show you how \
                          to navigate around.",
            },
            TutorialStep {
                title: "Desktop Icons",
                content: "Click on the desktop icons to open files and folders. You can also \
                          drag them around to rearrange them.",
            },
            TutorialStep {
                title: "Windows",
                content: "Windows can be dragged by their title bar, resized using the corners, \
                          and closed using the button on the top right.",
            },
            TutorialStep {
                title: "Language Toggle",
                content: "Click the language button in the top-right corner to switch between \
                          English and Dutch.",
            },
            TutorialStep {
                title: "Resume",
                content: "Click on the resume.txt icon to view my resume with my skills, \
                          experience, and education.",
            },
            TutorialStep {
                title: "References",
                content: "Click on the references folder to view my professional references.",
            },
        ],
        Language::Nl => &[
            TutorialStep {
                title: "Welkom bij mijn Portfolio!",
                content: "Dit is een interactieve desktop-stijl portfolio. Laat me je laten \
                          zien hoe je kunt navigeren.",
            },
            TutorialStep {
                title: "Desktop Iconen",
                content: "Klik op de desktop iconen om bestanden en mappen te openen. Je kunt \
                          ze ook verslepen om ze te verplaatsen.",
            },
            TutorialStep {
                title: "Vensters",
                content: "Vensters kunnen worden versleept via de titelbalk, worden aangepast \
                          met de hoeken, en worden gesloten met de knop rechtsboven.",
            },
            TutorialStep {
                title: "Taal Wisselen",
                content: "Klik op de taalknop in de rechterbovenhoek om te schakelen tussen \
                          Engels en Nederlands.",
            },
            TutorialStep {
                title: "CV",
                content: "Klik op het resume.txt icoon om mijn CV te bekijken met mijn \
                          vaardigheden, ervaring en opleiding.",
            },
            TutorialStep {
                title: "Referenties",
                content: "Klik op de referenties map om mijn professionele referenties te \
                          bekijken.",
            },
        ],
    }
}

fn back_label(language: Language) -> &'static str {
    match language {
        Language::En => "Previous",
        Language::Nl => "Vorige",
    }
}

fn next_label(language: Language, last_step: bool) -> &'static str {
    match (language, last_step) {
        (Language::En, false) => "Next",
        (Language::En, true) => "Finish",
        (Language::Nl, false) => "Volgende",
        (Language::Nl, true) => "Afronden",
    }
}

#[component]
/// Step-based first-visit walkthrough. Closing it in any way marks the
/// tutorial as seen.
pub(super) fn TutorialOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = Signal::derive(move || runtime.state.get().language);
    let step = create_rw_signal(0usize);

    let steps = move || tutorial_steps(language.get());
    let step_count = move || steps().len();
    let last_step = move || step.get() + 1 >= step_count();

    let dismiss = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::DismissTutorial);
    });
    let back = Callback::new(move |_| {
        step.update(|current| *current = current.saturating_sub(1));
    });
    let advance = Callback::new(move |ev| {
        if last_step() {
            dismiss.call(ev);
        } else {
            step.update(|current| *current += 1);
        }
    });

    view! {
        <OverlayScrim layout_class="tutorial-overlay" on_click=dismiss>
            <DialogPanel
                layout_class="tutorial-modal"
                aria_label="Portfolio tutorial"
            >
                <header class="tutorial-header">
                    <h2>{move || steps()[step.get()].title}</h2>
                    <Button
                        layout_class="tutorial-close"
                        variant=ButtonVariant::Quiet
                        aria_label="Close tutorial"
                        on_click=dismiss
                    >
                        "\u{00D7}"
                    </Button>
                </header>
                <div class="tutorial-content">
                    <p>{move || steps()[step.get()].content}</p>
                </div>
                <footer class="tutorial-footer">
                    <div class="step-indicator">
                        {move || {
                            (0..step_count())
                                .map(|index| {
                                    let active = move || index == step.get();
                                    view! {
                                        <button
                                            type="button"
                                            class="step-dot"
                                            data-active=move || active().to_string()
                                            aria-label=format!("Go to step {}", index + 1)
                                            on:click=move |_| step.set(index)
                                        ></button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="tutorial-buttons">
                        <Show when=move || { step.get() > 0 } fallback=|| ()>
                            <Button variant=ButtonVariant::Standard on_click=back>
                                {move || back_label(language.get())}
                            </Button>
                        </Show>
                        <Button variant=ButtonVariant::Accent on_click=advance>
                            {move || next_label(language.get(), last_step())}
                        </Button>
                    </div>
                </footer>
            </DialogPanel>
        </OverlayScrim>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn both_languages_carry_the_same_six_steps() {
        let en = tutorial_steps(Language::En);
        let nl = tutorial_steps(Language::Nl);
        assert_eq!(en.len(), 6);
        assert_eq!(nl.len(), 6);
        for (a, b) in en.iter().zip(nl) {
            assert!(!a.title.is_empty() && !b.title.is_empty());
            assert!(!a.content.is_empty() && !b.content.is_empty());
        }
    }

    #[test]
    fn footer_labels_follow_the_language_and_position() {
        assert_eq!(next_label(Language::En, false), "Next");
        assert_eq!(next_label(Language::En, true), "Finish");
        assert_eq!(next_label(Language::Nl, true), "Afronden");
        assert_eq!(back_label(Language::Nl), "Vorige");
    }
}
