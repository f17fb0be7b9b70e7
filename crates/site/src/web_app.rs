use desktop_runtime::{
    load_has_seen_tutorial, load_preferred_language, persist_preferred_language, DesktopProvider,
    DesktopShell, LoadingScreen,
};
use leptos::*;
use leptos_meta::*;
use portfolio_content::Language;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    // A stored language means this browser has booted before: skip the
    // terminal intro and go straight to the desktop.
    let language = create_rw_signal(load_preferred_language());

    let on_boot_complete = Callback::new(move |choice: Language| {
        persist_preferred_language(choice);
        language.set(Some(choice));
    });

    view! {
        <Title text="Phuphirat Morasi" />
        <Meta name="description" content="A desktop-style personal portfolio." />

        <main class="site-root">
            {move || match language.get() {
                Some(language) => {
                    view! { <DesktopEntry language /> }.into_view()
                }
                None => view! { <LoadingScreen on_complete=on_boot_complete /> }.into_view(),
            }}
        </main>
    }
}

#[component]
pub fn DesktopEntry(language: Language) -> impl IntoView {
    let show_tutorial = !load_has_seen_tutorial();

    view! {
        <DesktopProvider language show_tutorial>
            <DesktopShell />
        </DesktopProvider>
    }
}
