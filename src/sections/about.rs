use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::components::icon::IconView;
use crate::content::{Anchor, VALUES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Anchor::About.id()} class="py-16 sm:py-24 bg-slate-900 text-slate-100">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    eyebrow="Our Firm"
                    title="Our Commitment to You"
                    lead="Founded on a mission to be a trusted legal partner, we are dedicated to addressing the diverse needs of our clients with precision and reliability."
                />

                <div class="mt-16 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-10">
                    { for VALUES.iter().map(|item| html! {
                        <div key={item.title} class="text-center">
                            <div class="flex items-center justify-center h-12 w-12 rounded-md bg-amber-500/10 text-amber-500 mx-auto">
                                <IconView icon={item.icon} class="h-6 w-6" />
                            </div>
                            <h3 class="mt-5 text-xl font-semibold text-white">{item.title}</h3>
                            <p class="mt-2 text-base text-slate-400">{item.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
