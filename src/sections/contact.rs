use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::card::Card;
use crate::components::icon::{Icon, IconView};
use crate::components::input::{Input, Textarea};
use crate::config;
use crate::content::{Anchor, ContactChannel, CONTACT_CHANNELS};
use crate::interaction::contact_form::{ContactForm, Field};

#[derive(Properties, PartialEq)]
struct ChannelProps {
    channel: ContactChannel,
}

#[function_component(Channel)]
fn channel(props: &ChannelProps) -> Html {
    let channel = &props.channel;
    html! {
        <div class="flex gap-4">
            <div class="flex-shrink-0 h-10 w-10 flex items-center justify-center bg-slate-800 rounded-lg">
                <IconView icon={channel.icon} class="h-6 w-6 text-amber-500" />
            </div>
            <div>
                <h4 class="text-lg font-semibold text-white">{channel.title}</h4>
                { for channel.lines.iter().map(|line| match line.href {
                    Some(href) => html! {
                        <a href={href} class="block text-base text-slate-300 hover:text-amber-500">{line.text}</a>
                    },
                    None => html! {
                        <p class="text-base text-slate-300">{line.text}</p>
                    },
                }) }
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);

    // One-shot reset after a simulated send. The Timeout lives in the effect's
    // cleanup, so unmounting the section (or the flag flipping back) drops and
    // cancels it before it can touch a dead form.
    {
        let submitted = form.is_submitted();
        let form = form.clone();
        use_effect_with_deps(
            move |submitted: &bool| {
                let timeout = submitted.then(|| {
                    Timeout::new(config::FORM_RESET_DELAY_MS, move || {
                        debug!("resetting contact form");
                        let mut next = (*form).clone();
                        next.reset();
                        form.set(next);
                    })
                });
                move || drop(timeout)
            },
            submitted,
        );
    }

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(message) => {
                    info!("simulated contact submission: {}", message.subject);
                    if let Ok(json) = serde_json::to_string(&message) {
                        debug!("contact payload (not transmitted): {}", json);
                    }
                    form.set(next);
                }
                Err(e) => warn!("contact form not sent: {}", e),
            }
        })
    };

    let label = |field: Field| html! {
        <label for={field.id()} class="block text-sm font-medium text-slate-300">{field.label()}</label>
    };

    html! {
        <section id={Anchor::Contact.id()} class="py-16 sm:py-24 bg-slate-900/95">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div>
                        <h2 class="text-3xl sm:text-4xl font-extrabold text-white tracking-tight">{"Get In Touch"}</h2>
                        <p class="mt-4 text-xl text-slate-300">
                            {"We are here to help. Reach out to us to schedule a consultation and discuss your legal needs."}
                        </p>
                        <div class="mt-10 space-y-6">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <Channel key={channel.title} channel={*channel} />
                            }) }
                        </div>
                    </div>

                    <Card class="p-8">
                        <form id="contact-form" class="space-y-6" onsubmit={onsubmit}>
                            <div>
                                { label(Field::Name) }
                                <Input
                                    id={Field::Name.id()}
                                    autocomplete={AttrValue::Static("name")}
                                    required=true
                                    class="mt-1"
                                    value={form.value(Field::Name).to_string()}
                                    oninput={on_field(Field::Name)}
                                />
                            </div>
                            <div>
                                { label(Field::Email) }
                                <Input
                                    id={Field::Email.id()}
                                    input_type="email"
                                    autocomplete={AttrValue::Static("email")}
                                    required=true
                                    class="mt-1"
                                    value={form.value(Field::Email).to_string()}
                                    oninput={on_field(Field::Email)}
                                />
                            </div>
                            <div>
                                { label(Field::Subject) }
                                <Input
                                    id={Field::Subject.id()}
                                    required=true
                                    class="mt-1"
                                    value={form.value(Field::Subject).to_string()}
                                    oninput={on_field(Field::Subject)}
                                />
                            </div>
                            <div>
                                { label(Field::Message) }
                                <Textarea
                                    id={Field::Message.id()}
                                    rows={4}
                                    required=true
                                    class="mt-1"
                                    value={form.value(Field::Message).to_string()}
                                    oninput={on_field(Field::Message)}
                                />
                            </div>

                            {
                                if form.is_submitted() {
                                    html! {
                                        <div class="flex items-center space-x-2 rounded-md bg-green-500/10 p-3 text-green-400">
                                            <IconView icon={Icon::CheckCircle} class="h-5 w-5" />
                                            <p class="text-sm font-medium">{"Message sent! We will be in touch soon."}</p>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <div>
                                            <Button button_type="submit" class="w-full" size={ButtonSize::Large}>
                                                {"Send Message"}
                                            </Button>
                                        </div>
                                    }
                                }
                            }
                        </form>
                    </Card>
                </div>
            </div>
        </section>
    }
}
