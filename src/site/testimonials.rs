//! Testimonial cards.

use leptos::prelude::*;

use crate::content::{SiteContent, display_date};

#[component]
pub fn Testimonials(content: &'static SiteContent) -> impl IntoView {
    view! {
        <section class="testimonials">
            <h3 class="h3 testimonials-title">"Testimonials"</h3>
            <ul class="testimonials-list has-scrollbar" data-testimonials="">
                {content
                    .testimonials
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="testimonials-item">
                                <div class="content-card" data-testimonials-item="">
                                    <figure class="testimonials-avatar-box">
                                        <img src=item.avatar alt=item.name width="60" height="60"/>
                                    </figure>
                                    <h4 class="h4 testimonials-item-title">{item.name}</h4>
                                    <time datetime=item.date>{display_date(item.date)}</time>
                                    <div class="testimonials-text">
                                        <p>{item.text}</p>
                                    </div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
