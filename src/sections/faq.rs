use log::debug;
use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::components::icon::{Icon, IconView};
use crate::content::{Anchor, FaqEntry, FAQS};
use crate::interaction::accordion::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    index: usize,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    let panel_id = format!("faq-answer-{}", props.index);

    html! {
        <div class="rounded-xl border border-slate-700 bg-slate-800 shadow-lg">
            <button
                type="button"
                class="flex justify-between items-center w-full p-6 text-left"
                aria-expanded={props.is_open.to_string()}
                aria-controls={panel_id.clone()}
                onclick={toggle}
            >
                <span class="text-lg font-medium text-white">{props.entry.question}</span>
                <IconView
                    icon={Icon::ChevronDown}
                    class={classes!(
                        "h-6", "w-6", "text-amber-500", "transition-transform", "duration-300",
                        props.is_open.then_some("rotate-180")
                    )}
                />
            </button>
            <div
                id={panel_id}
                class={classes!(
                    "grid", "overflow-hidden", "transition-all", "duration-300", "ease-in-out",
                    if props.is_open { classes!("grid-rows-[1fr]", "opacity-100") } else { classes!("grid-rows-[0fr]", "opacity-0") }
                )}
            >
                <div class="overflow-hidden">
                    <p class="px-6 pb-6 text-base text-slate-300">{props.entry.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let mut next = *accordion;
            next.toggle(index);
            debug!("faq expanded entry: {:?}", next.open_index());
            accordion.set(next);
        })
    };

    html! {
        <section id={Anchor::Faq.id()} class="py-16 sm:py-24 bg-slate-900">
            <div class="container mx-auto max-w-3xl px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    eyebrow="We're Here to Help"
                    title="Frequently Asked Questions"
                    lead="Quick answers to common questions about our services and processes."
                />
                <div class="mt-16 space-y-4">
                    { for FAQS.iter().enumerate().map(|(index, entry)| html! {
                        <FaqItem
                            key={index}
                            entry={*entry}
                            index={index}
                            is_open={accordion.is_open(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
