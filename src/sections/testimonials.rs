use yew::prelude::*;

use crate::content::Anchor;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id={Anchor::Testimonials.id()} class="py-16 sm:py-24 bg-amber-500 text-slate-900">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl sm:text-4xl font-extrabold tracking-tight">
                        {"What Our Clients Say"}
                    </h2>
                    <div class="mt-10 max-w-3xl mx-auto">
                        <p class="text-2xl font-medium italic">
                            {"\"This section is ready to feature powerful testimonials from your satisfied clients, building trust and credibility with new prospects.\""}
                        </p>
                        <p class="mt-4 text-lg font-semibold">{"- A Future Satisfied Client"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
