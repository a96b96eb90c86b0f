//! About section: intro paragraphs, services, testimonials, clients.

use leptos::prelude::*;

use crate::content::{ServiceIcon, SiteContent};
use crate::site::clients::Clients;
use crate::site::testimonials::Testimonials;

fn icon_slug(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Design => "design",
        ServiceIcon::Dev => "dev",
        ServiceIcon::App => "app",
        ServiceIcon::Photo => "photo",
        ServiceIcon::Data => "data",
        ServiceIcon::Leadership => "leadership",
    }
}

#[component]
pub fn About(content: &'static SiteContent) -> impl IntoView {
    view! {
        <header>
            <h2 class="h2 article-title">"About me"</h2>
        </header>

        <section class="about-text">
            {content
                .profile
                .about
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
        </section>

        <section class="service">
            <h3 class="h3 service-title">"What i'm doing"</h3>
            <ul class="service-list">
                {content
                    .services
                    .iter()
                    .map(|service| {
                        let icon_class = format!("icon icon--{}", icon_slug(service.icon));
                        view! {
                            <li class="service-item">
                                <div class="service-icon-box">
                                    <span class=icon_class aria-hidden="true"></span>
                                </div>
                                <div class="service-content-box">
                                    <h4 class="h4 service-item-title">{service.title}</h4>
                                    <p class="service-item-text">{service.description}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>

        <Testimonials content=content/>
        <Clients content=content/>
    }
}
