//! Blog section: post cards.

use leptos::prelude::*;

use crate::content::{SiteContent, display_date};

#[component]
pub fn Blog(content: &'static SiteContent) -> impl IntoView {
    view! {
        <header>
            <h2 class="h2 article-title">"Blog"</h2>
        </header>

        <section class="blog-posts">
            <ul class="blog-posts-list">
                {content
                    .blog_posts
                    .iter()
                    .map(|post| {
                        view! {
                            <li class="blog-post-item">
                                <figure class="blog-banner-box">
                                    <img src=post.image alt=post.title loading="lazy"/>
                                </figure>
                                <div class="blog-content">
                                    <div class="blog-meta">
                                        <p class="blog-category">{post.category}</p>
                                        <span class="dot"></span>
                                        <time datetime=post.date>{display_date(post.date)}</time>
                                    </div>
                                    <h3 class="h3 blog-item-title">{post.title}</h3>
                                    <p class="blog-text">{post.excerpt}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
