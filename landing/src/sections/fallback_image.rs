use leptos::prelude::*;

/// Image that degrades to a generated placeholder when the asset fails to
/// load. The swap happens locally; a broken CDN never breaks the page.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    width: u32,
    height: u32,
    #[prop(optional, into)] class: Option<&'static str>,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let placeholder = format!("/placeholder.svg?height={height}&width={width}");
    let placeholder_alt = format!("{alt} (Placeholder)");

    view! {
        <img
            src=move || if failed.get() { placeholder.clone() } else { src.clone() }
            alt=move || if failed.get() { placeholder_alt.clone() } else { alt.clone() }
            width=width
            height=height
            class=class
            on:error=move |_| set_failed.set(true)
        />
    }
}
