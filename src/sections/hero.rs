use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::image::FallbackImage;
use crate::config;
use crate::content::{Anchor, HERO_IMAGE, MOTTO};
use crate::navigation;

#[function_component(Hero)]
pub fn hero() -> Html {
    let book = Callback::from(|_: MouseEvent| navigation::jump_to(Anchor::Contact));
    let explore = Callback::from(|_: MouseEvent| navigation::jump_to(Anchor::PracticeAreas));

    html! {
        <section id={Anchor::Home.id()} class="relative bg-slate-900 overflow-hidden h-[90vh] min-h-[600px] flex items-center">
            <div class="absolute inset-0">
                <FallbackImage
                    class="w-full h-full object-cover"
                    src={HERO_IMAGE}
                    fallback={config::HERO_FALLBACK}
                    alt="Nairobi skyline at night"
                />
                // Darkens the photo so the headline stays readable
                <div class="absolute inset-0 bg-slate-900/70 backdrop-blur-sm"></div>
            </div>

            <div class="relative container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 z-10">
                <div class="max-w-2xl">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold tracking-tight text-white">
                        {"Expert Legal Guidance."}
                        <span class="block text-amber-500">{"Client-Centered Solutions."}</span>
                    </h1>
                    <p class="mt-4 text-xl sm:text-2xl font-medium text-slate-300">
                        {format!("\"{}\" ", MOTTO)}
                        <span class="italic text-lg">{"(The thing speaks for itself)"}</span>
                    </p>
                    <p class="mt-6 text-lg text-slate-300 max-w-lg">
                        {"We provide unwavering professional guidance, grounded in integrity and expertise, to deliver expeditious, cost-effective, and client-centered solutions."}
                    </p>
                    <div class="mt-10 flex flex-col sm:flex-row sm:items-center gap-4">
                        <Button size={ButtonSize::Large} onclick={book}>
                            {"Book a Consultation"}
                        </Button>
                        <Button variant={ButtonVariant::Outline} size={ButtonSize::Large} onclick={explore}>
                            {"Explore Our Services"}
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
