//! Client logo strip.

use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn Clients(content: &'static SiteContent) -> impl IntoView {
    view! {
        <section class="clients">
            <h3 class="h3 clients-title">"Clients"</h3>
            <ul class="clients-list has-scrollbar">
                {content
                    .clients
                    .iter()
                    .map(|client| {
                        view! {
                            <li class="clients-item">
                                <img src=client.logo alt=client.name loading="lazy"/>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
