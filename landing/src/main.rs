// Ajil Mutawara marketing site — Leptos 0.8 Edition

mod menu;
mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_2(
        &JsValue::from_str("%cAjil Mutawara — Building Solutions"),
        &JsValue::from_str("color: #eab308; font-weight: bold;"),
    );
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
        </main>
        <Footer />
    }
}
