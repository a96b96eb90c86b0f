//! Tab navigation bar. Each tab is a plain link carrying the `tab` query
//! parameter; `site.js` layers the animated transition on top.

use leptos::prelude::*;

use super::Tab;

#[component]
pub fn TabsNav(active: Tab, blog_enabled: bool) -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul class="navbar-list">
                {Tab::ALL
                    .into_iter()
                    .filter(|tab| blog_enabled || *tab != Tab::Blog)
                    .map(|tab| {
                        let class = if tab == active { "navbar-link active" } else { "navbar-link" };
                        view! {
                            <li class="navbar-item">
                                <a
                                    class=class
                                    href=format!("/?tab={}", tab.slug())
                                    data-tab-link=tab.slug()
                                >
                                    {tab.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
