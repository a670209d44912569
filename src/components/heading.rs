use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub lead: AttrValue,
}

/// Centered amber eyebrow, big title and a lead paragraph.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="text-center">
            <h2 class="text-base font-semibold text-amber-500 tracking-wide uppercase">{props.eyebrow.clone()}</h2>
            <p class="mt-2 text-3xl sm:text-4xl font-extrabold text-white tracking-tight">{props.title.clone()}</p>
            <p class="mt-4 max-w-2xl mx-auto text-xl text-slate-300">{props.lead.clone()}</p>
        </div>
    }
}
