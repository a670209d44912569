use yew::prelude::*;

use crate::components::button::{button_classes, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::heading::SectionHeading;
use crate::components::icon::{Icon, IconView};
use crate::components::image::FallbackImage;
use crate::config;
use crate::content::{Anchor, INSIGHTS};

#[function_component(Insights)]
pub fn insights() -> Html {
    // "Read More" is a link styled as a button; articles have no pages yet.
    let read_more = button_classes(ButtonVariant::Link, ButtonSize::Default, &classes!("px-0", "group"));

    html! {
        <section id={Anchor::Insights.id()} class="py-16 sm:py-24 bg-slate-900/95">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    eyebrow="Our Expertise"
                    title="Legal Insights & Updates"
                    lead="Stay informed with our latest articles, analyses, and legal commentary from our expert team."
                />
                <div class="mt-16 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for INSIGHTS.iter().map(|article| html! {
                        <Card key={article.title} class="flex flex-col">
                            <FallbackImage
                                class="rounded-t-xl h-48 w-full object-cover"
                                src={article.image}
                                fallback={config::INSIGHT_FALLBACK}
                                alt={article.title}
                            />
                            <CardHeader>
                                <CardDescription class="text-amber-500 font-medium">{article.category}</CardDescription>
                                <CardTitle class="text-white text-xl">{article.title}</CardTitle>
                            </CardHeader>
                            <CardContent class="flex-grow">
                                <CardDescription>{article.description}</CardDescription>
                            </CardContent>
                            <div class="p-6 pt-0">
                                <a href={article.href} class={read_more.clone()}>
                                    {"Read More"}
                                    <IconView
                                        icon={Icon::ArrowRight}
                                        class="h-4 w-4 ml-2 transition-transform group-hover:translate-x-1"
                                    />
                                </a>
                            </div>
                        </Card>
                    }) }
                </div>
            </div>
        </section>
    }
}
