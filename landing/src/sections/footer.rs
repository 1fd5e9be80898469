use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <p class="footer-copyright">
                    "© 2023 Ajil Mutawara. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
