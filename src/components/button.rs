use yew::prelude::*;

const BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-amber-400 focus:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    #[allow(dead_code)]
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-amber-500 text-slate-900 hover:bg-amber-400",
            ButtonVariant::Outline => "border border-amber-500 text-amber-500 hover:bg-amber-500/10",
            ButtonVariant::Ghost => "text-amber-500 hover:bg-amber-500/10",
            ButtonVariant::Link => "text-amber-500 underline-offset-4 hover:underline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    #[allow(dead_code)]
    Small,
    Large,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 py-2 px-4",
            ButtonSize::Small => "h-9 px-3 rounded-md",
            ButtonSize::Large => "h-11 px-8 rounded-md",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &Classes) -> Classes {
    classes!(BASE, variant.classes(), size.classes(), extra.clone())
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = props.onclick.clone().unwrap_or_default();

    html! {
        <button
            type={props.button_type.clone()}
            class={button_classes(props.variant, props.size, &props.class)}
            onclick={onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_and_regular_size() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }

    #[test]
    fn descriptor_combines_base_variant_size_and_caller_classes() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Large, &classes!("w-full"));
        assert!(classes.contains("inline-flex"));
        assert!(classes.contains("border-amber-500"));
        assert!(classes.contains("px-8"));
        assert!(classes.contains("w-full"));
        assert!(!classes.contains("bg-amber-500"));
    }

    #[test]
    fn every_variant_has_its_own_descriptor() {
        let all = [
            ButtonVariant::Primary,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }
}
