use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::Button;
use crate::components::icon::{Icon, IconView};
use crate::components::image::FallbackImage;
use crate::config;
use crate::content::{Anchor, FIRM_NAME, LOGO_SRC, NAV_LINKS};
use crate::interaction::menu::MobileMenu;
use crate::navigation;

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MobileMenu::default);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            debug!("mobile menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    // Links keep their default behaviour (native anchor scroll), we only collapse.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let book_consultation = {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            navigation::jump_to(Anchor::Contact);
            close_menu.emit(e);
        })
    };

    let is_open = menu.is_open();

    html! {
        <header class={classes!(
            "bg-slate-900/80", "sticky", "top-0", "z-50", "backdrop-blur-sm", "transition-shadow",
            if is_scrolled { "shadow-xl" } else { "shadow-md" }
        )}>
            <nav class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <a href={Anchor::Home.href()} class="flex-shrink-0 flex items-center">
                        <FallbackImage
                            class="block h-14 w-auto"
                            src={LOGO_SRC}
                            fallback={config::LOGO_FALLBACK}
                            alt={format!("{} logo", FIRM_NAME)}
                        />
                    </a>

                    <div class="hidden md:flex md:items-center md:space-x-8">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.href()} class="font-medium text-slate-300 hover:text-amber-500 transition-colors">
                                {link.name}
                            </a>
                        }) }
                    </div>

                    <div class="hidden md:flex items-center">
                        <Button class="ml-6" onclick={book_consultation.clone()}>
                            {"Book Consultation"}
                        </Button>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            type="button"
                            onclick={toggle_menu}
                            class="inline-flex items-center justify-center p-2 rounded-md text-slate-400 hover:text-amber-500 hover:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-amber-500"
                            aria-controls="mobile-menu"
                            aria-expanded={is_open.to_string()}
                        >
                            <span class="sr-only">{"Open main menu"}</span>
                            <IconView
                                icon={if is_open { Icon::Close } else { Icon::Menu }}
                                class="block h-6 w-6"
                            />
                        </button>
                    </div>
                </div>
            </nav>

            {
                if is_open {
                    html! {
                        <div class="md:hidden" id="mobile-menu">
                            <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                                { for NAV_LINKS.iter().map(|link| html! {
                                    <a
                                        key={link.name}
                                        href={link.href()}
                                        class="block px-3 py-2 rounded-md text-base font-medium text-slate-200 hover:text-slate-900 hover:bg-amber-500"
                                        onclick={close_menu.clone()}
                                    >
                                        {link.name}
                                    </a>
                                }) }
                            </div>
                            <div class="pt-4 pb-3 border-t border-slate-700">
                                <Button class="w-full" onclick={book_consultation}>
                                    {"Book Consultation"}
                                </Button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
