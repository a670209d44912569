use yew::prelude::*;

const CARD: &str = "rounded-xl border border-slate-700 bg-slate-800 text-slate-100 shadow-lg transition-all duration-300 hover:border-amber-500";
const HEADER: &str = "flex flex-col space-y-1.5 p-6";
const TITLE: &str = "font-semibold leading-none tracking-tight";
const DESCRIPTION: &str = "text-sm text-slate-400";
const CONTENT: &str = "p-6 pt-0";

/// Fixed base classes followed by whatever the caller passed in.
pub fn card_classes(base: &'static str, extra: &Classes) -> Classes {
    classes!(base, extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={card_classes(CARD, &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardProps) -> Html {
    html! {
        <div class={card_classes(HEADER, &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardProps) -> Html {
    html! {
        <h3 class={card_classes(TITLE, &props.class)}>
            { for props.children.iter() }
        </h3>
    }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardProps) -> Html {
    html! {
        <p class={card_classes(DESCRIPTION, &props.class)}>
            { for props.children.iter() }
        </p>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div class={card_classes(CONTENT, &props.class)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_descriptors_split_into_single_classes() {
        let header = card_classes(HEADER, &classes!("flex-row", "gap-4"));
        assert!(header.contains("flex-col"));
        assert!(header.contains("space-y-1.5"));
        assert!(header.contains("flex-row"));
        assert!(!header.contains(HEADER));

        let card = card_classes(CARD, &Classes::new());
        assert!(card.contains("hover:border-amber-500"));
        assert!(card.contains("rounded-xl"));
    }
}
