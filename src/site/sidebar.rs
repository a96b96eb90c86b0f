//! Profile sidebar: avatar, identity, contacts, social links.
//!
//! Collapsed by default on small screens; `site.js` wires the
//! "Show Contacts" toggle.

use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn Sidebar(content: &'static SiteContent) -> impl IntoView {
    let profile = content.profile;
    let status_class = if profile.status.available {
        "status-chip is-open"
    } else {
        "status-chip is-closed"
    };

    view! {
        <aside class="sidebar" data-sidebar="">
            <div class="sidebar-info">
                <figure class="avatar-box">
                    <img src=profile.avatar alt=profile.name width="96" height="96"/>
                </figure>

                <div class="info-content">
                    <h1 class="name" title=profile.name>{profile.name}</h1>
                    <p class="title">{profile.role}</p>
                    <div class="status-row">
                        <span class=status_class>{profile.status.label}</span>
                    </div>
                </div>

                <button type="button" class="info_more-btn" data-sidebar-btn="" aria-expanded="false">
                    <span class="info_more-btn__label">"Show Contacts"</span>
                </button>
            </div>

            <div class="sidebar-info_more">
                <div class="separator"></div>

                <ul class="contacts-list">
                    <li class="contact-item">
                        <div class="icon-box">
                            <span class="icon icon--mail" aria-hidden="true"></span>
                        </div>
                        <div class="contact-info">
                            <p class="contact-title">"Email"</p>
                            <a
                                href=format!("mailto:{}", profile.email)
                                class="contact-link"
                                data-track="contact_email_click"
                            >
                                {profile.email}
                            </a>
                        </div>
                    </li>

                    <li class="contact-item">
                        <div class="icon-box">
                            <span class="icon icon--phone" aria-hidden="true"></span>
                        </div>
                        <div class="contact-info">
                            <p class="contact-title">"Phone"</p>
                            <a
                                href=format!("tel:{}", profile.phone)
                                class="contact-link"
                                data-track="contact_phone_click"
                            >
                                {profile.phone}
                            </a>
                        </div>
                    </li>

                    <li class="contact-item">
                        <div class="icon-box">
                            <span class="icon icon--calendar" aria-hidden="true"></span>
                        </div>
                        <div class="contact-info">
                            <p class="contact-title">"Birthday"</p>
                            <time datetime=profile.birthday.datetime>{profile.birthday.label}</time>
                        </div>
                    </li>

                    <li class="contact-item">
                        <div class="icon-box">
                            <span class="icon icon--pin" aria-hidden="true"></span>
                        </div>
                        <div class="contact-info">
                            <p class="contact-title">"Location"</p>
                            <address>{profile.location}</address>
                        </div>
                    </li>
                </ul>

                <div class="separator"></div>

                <ul class="social-list">
                    {content
                        .socials
                        .iter()
                        .map(|social| {
                            let icon_class =
                                format!("icon icon--{}", social.label.to_ascii_lowercase());
                            view! {
                                <li class="social-item">
                                    <a
                                        class="social-link"
                                        href=social.href
                                        target="_blank"
                                        rel="noreferrer"
                                        data-track="social_click"
                                        data-track-network=social.label
                                    >
                                        <span class=icon_class aria-hidden="true"></span>
                                        <span class="visually-hidden">{social.label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </aside>
    }
}
