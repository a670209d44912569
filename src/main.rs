use log::info;
use yew::prelude::*;

mod config;
mod content;
mod navigation;
mod components {
    pub mod button;
    pub mod card;
    pub mod heading;
    pub mod icon;
    pub mod image;
    pub mod input;
}
mod interaction {
    pub mod accordion;
    pub mod contact_form;
    pub mod menu;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod insights;
    pub mod practice_areas;
    pub mod team;
    pub mod testimonials;
}

use content::Anchor;
use sections::{
    about::About,
    contact::Contact,
    faq::Faq,
    footer::Footer,
    header::Header,
    hero::Hero,
    insights::Insights,
    practice_areas::PracticeAreas,
    team::Team,
    testimonials::Testimonials,
};

fn render_section(anchor: Anchor) -> Html {
    match anchor {
        Anchor::Home => html! { <Hero /> },
        Anchor::About => html! { <About /> },
        Anchor::PracticeAreas => html! { <PracticeAreas /> },
        Anchor::Team => html! { <Team /> },
        Anchor::Insights => html! { <Insights /> },
        Anchor::Testimonials => html! { <Testimonials /> },
        Anchor::Faq => html! { <Faq /> },
        Anchor::Contact => html! { <Contact /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="bg-slate-900 text-slate-100 antialiased font-sans">
            <Header />
            <main>
                { for Anchor::PAGE_ORDER.into_iter().map(render_section) }
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use crate::content::{Anchor, NAV_LINKS};
    use crate::interaction::{accordion::Accordion, contact_form::ContactForm, menu::MobileMenu};

    #[test]
    fn visitor_walkthrough() {
        let mut menu = MobileMenu::default();
        let mut faq = Accordion::default();
        let form = ContactForm::default();
        assert!(!menu.is_open());
        assert_eq!(faq.open_index(), None);
        assert!(!form.is_submitted());

        faq.toggle(2);
        assert_eq!(faq.open_index(), Some(2));
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);

        menu.toggle();
        assert!(menu.is_open());
        let contact = NAV_LINKS.iter().find(|l| l.name == "Contact").unwrap();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(contact.href(), "#contact");
    }

    #[test]
    fn hero_is_first_and_contact_last() {
        assert_eq!(Anchor::PAGE_ORDER.first(), Some(&Anchor::Home));
        assert_eq!(Anchor::PAGE_ORDER.last(), Some(&Anchor::Contact));
    }
}
