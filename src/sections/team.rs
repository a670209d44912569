use yew::prelude::*;

use crate::components::card::Card;
use crate::components::heading::SectionHeading;
use crate::components::image::FallbackImage;
use crate::config;
use crate::content::{Anchor, TeamMember, TEAM};

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    html! {
        <Card class="flex flex-col sm:flex-row gap-8 p-6 md:p-8">
            <div class="sm:flex-shrink-0">
                <FallbackImage
                    class="h-48 w-48 rounded-lg object-cover shadow-lg mx-auto"
                    src={member.portrait}
                    fallback={config::PORTRAIT_FALLBACK}
                    alt={member.name}
                />
            </div>
            <div class="flex-1">
                <h3 class="text-2xl font-bold text-white">{member.name}</h3>
                <p class="text-lg font-medium text-amber-500">{member.role}</p>
                <p class="mt-4 text-base text-slate-300">{member.credentials}</p>
                <p class="mt-3 text-base text-slate-400">{member.experience}</p>
            </div>
        </Card>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id={Anchor::Team.id()} class="py-16 sm:py-24 bg-slate-900">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    eyebrow="Our Experts"
                    title="Meet Our Legal Team"
                    lead="A dedicated team of professionals committed to pragmatic, client-oriented solutions."
                />
                <div class="mt-16 grid grid-cols-1 md:grid-cols-2 gap-12 lg:gap-16">
                    { for TEAM.iter().map(|member| html! {
                        <MemberCard key={member.name} member={*member} />
                    }) }
                </div>
            </div>
        </section>
    }
}
