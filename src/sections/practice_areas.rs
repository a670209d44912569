use yew::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::heading::SectionHeading;
use crate::components::icon::IconView;
use crate::content::{Anchor, PRACTICE_AREAS};

#[function_component(PracticeAreas)]
pub fn practice_areas() -> Html {
    html! {
        <section id={Anchor::PracticeAreas.id()} class="py-16 sm:py-24 bg-slate-900/95">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    eyebrow="What We Do"
                    title="Our Practice Areas"
                    lead="We offer comprehensive legal support across a wide range of specialized fields."
                />
                <div class="mt-16 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <Card key={area.title}>
                            <CardHeader class="flex-row items-center gap-4">
                                <IconView icon={area.icon} class="h-8 w-8 text-amber-500" />
                                <CardTitle class="text-white text-xl">{area.title}</CardTitle>
                            </CardHeader>
                            <CardContent>
                                <CardDescription>{area.description}</CardDescription>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </div>
        </section>
    }
}
