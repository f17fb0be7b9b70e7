use leptos::*;
use portfolio_content::{ContentEntry, Language, ReferenceItem};

use super::folder::FolderView;
use crate::{model::WindowContent, runtime_context::use_desktop_runtime};

#[component]
/// Renders a window's body from its content payload.
pub(super) fn WindowContentView(content: WindowContent) -> impl IntoView {
    match content {
        WindowContent::Resume => view! { <ResumeView /> }.into_view(),
        WindowContent::ReferenceFolder => view! { <FolderView /> }.into_view(),
        WindowContent::Reference(item) => view! { <ReferenceView item /> }.into_view(),
    }
}

fn entry_view(entry: &ContentEntry) -> impl IntoView {
    let subtitle = (!entry.subtitle.is_empty()).then(|| {
        view! { <p class="entry-date">{entry.subtitle}</p> }
    });
    view! {
        <div class="entry">
            <h3>{entry.title}</h3>
            {subtitle}
            {entry.lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
        </div>
    }
}

fn section_view(heading: &'static str, entries: &'static [ContentEntry]) -> impl IntoView {
    view! {
        <section class="cv-section">
            <h2>{heading}</h2>
            {entries.iter().map(entry_view).collect_view()}
        </section>
    }
}

#[component]
/// The combined CV: header plus skills, experience, education, and projects.
fn ResumeView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let language = Signal::derive(move || runtime.state.get().language);

    move || {
        let language: Language = language.get();
        view! {
            <div class="combined-cv">
                <header class="cv-header">
                    <h1>"Phuphirat Morasi"</h1>
                    <p>"Software Engineer"</p>
                    <p>
                        "\u{1F4E7} phuphirat.morasi@gmail.com | \u{1F4F1} +31-617601881 | \
                         \u{1F310} linkedin.com/in/phuphirat-morasi"
                    </p>
                    <p>{format!("\u{1F4CD} {}", portfolio_content::location(language))}</p>
                    <p class="profile">{portfolio_content::about(language)}</p>
                </header>
                {section_view("Skills", portfolio_content::skills(language))}
                {section_view("Experience", portfolio_content::experience(language))}
                {section_view("Education", portfolio_content::education(language))}
                {section_view("Projects", portfolio_content::projects(language))}
            </div>
        }
    }
}

#[component]
/// A single professional reference: name, position lines, contact line.
fn ReferenceView(item: ReferenceItem) -> impl IntoView {
    view! {
        <div class="reference-content">
            <h3>{item.name}</h3>
            {item.titles.into_iter().map(|title| view! { <p>{title}</p> }).collect_view()}
            <p class="contact">{item.contact}</p>
        </div>
    }
}
