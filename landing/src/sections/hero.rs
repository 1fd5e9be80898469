use leptos::prelude::*;

const HERO_BACKGROUND: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/background-VQT8xNQyRGO5pfKXhTrHFpm3KnS74d.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            class="hero"
            style=format!("background-image: url('{HERO_BACKGROUND}')")
        >
            <div class="hero-overlay"></div>
            <div class="hero-inner">
                <div class="hero-content">
                    <p class="hero-eyebrow">
                        "Superior Structural Performance and Regulation Compliant"
                    </p>
                    <h1 class="hero-title">
                        "Building Solutions for Architectural and Functional Project Needs"
                    </h1>
                    <p class="hero-description">
                        "We Are, Suppliers Of Superior Quality Products In Commercial UPS And "
                        "Aluminum Profiles For Wide Applications To Saudi Arabian Projects. "
                        "We Also Extend Supplier Integration Services With Our Key Strategic "
                        "Partners In Consulting And End-to-end Project Implementation."
                    </p>
                    <p class="hero-callout">
                        "Discover How Our Innovative Products Can Elevate Your Next Project"
                    </p>
                    <button class="hero-cta">"Inquire Now"</button>
                </div>
            </div>
        </section>
    }
}
