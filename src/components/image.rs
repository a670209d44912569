use log::warn;
use yew::prelude::*;

/// Source to render: the primary until it has failed once, then the fallback.
/// The fallback is never swapped again, so a broken fallback can't loop.
pub fn resolve_source<'a>(primary: &'a str, fallback: &'a str, failed: bool) -> &'a str {
    if failed {
        fallback
    } else {
        primary
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub fallback: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                warn!("image {} failed to load, substituting placeholder", src);
                failed.set(true);
            }
        })
    };

    let src = resolve_source(&props.src, &props.fallback, *failed).to_string();

    html! {
        <img
            class={props.class.clone()}
            src={src}
            alt={props.alt.clone()}
            onerror={onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_until_failure() {
        assert_eq!(resolve_source("/logo.png", "https://fallback", false), "/logo.png");
        assert_eq!(resolve_source("/logo.png", "https://fallback", true), "https://fallback");
    }
}
