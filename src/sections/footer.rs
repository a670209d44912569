use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{Anchor, EMAIL, FIRM_NAME, MOTTO, NAV_LINKS, OFFICE_ADDRESS, PRIMARY_PHONE};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All Rights Reserved.", year, FIRM_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let contact_links = [(Icon::Phone, PRIMARY_PHONE), (Icon::Mail, EMAIL)];

    html! {
        <footer class="bg-slate-900 border-t border-slate-800 text-slate-400">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    <div class="md:col-span-1">
                        <a href={Anchor::Home.href()} class="flex-shrink-0 flex items-center">
                            <div>
                                <span class="text-2xl font-bold text-white">{"A. Muchemi Muthee"}</span>
                                <span class="block text-sm font-medium text-amber-500 -mt-1">{"& Co. Advocates"}</span>
                            </div>
                        </a>
                        <p class="mt-4 text-base">{"Commissioner for Oaths and Notary Public."}</p>
                        <p class="mt-2 text-base italic">{format!("\"{}\"", MOTTO)}</p>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-white tracking-wider uppercase">{"Quick Links"}</h3>
                        <ul class="mt-4 space-y-2">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <li key={link.name}>
                                    <a href={link.href()} class="hover:text-amber-500 transition-colors">{link.name}</a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-white tracking-wider uppercase">{"Contact Info"}</h3>
                        <ul class="mt-4 space-y-3">
                            <li class="flex gap-3">
                                <IconView icon={Icon::MapPin} class="flex-shrink-0 h-6 w-6 text-amber-500/70" />
                                <span>{OFFICE_ADDRESS}</span>
                            </li>
                            { for contact_links.iter().map(|(icon, line)| html! {
                                <li class="flex gap-3">
                                    <IconView icon={*icon} class="flex-shrink-0 h-6 w-6 text-amber-500/70" />
                                    <span>
                                        <a href={line.href.unwrap_or("#")} class="hover:text-amber-500 transition-colors">{line.text}</a>
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="mt-12 border-t border-slate-800 pt-8 text-center">
                    <p class="text-base">{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_mentions_year_and_firm() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 A. Muchemi Muthee & Co. Advocates. All Rights Reserved."
        );
    }
}
