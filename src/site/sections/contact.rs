//! Contact section: location map and the contact form.
//!
//! The form's client-side constraints (required, email pattern, maxlength)
//! mirror the server checks in `services::contact`. The hidden `company`
//! input is the honeypot. `site.js` submits the form as JSON and shows the
//! toast; without it the plain form POST still reaches `/api/contact`.

use leptos::prelude::*;

use crate::services::contact::MAX_MESSAGE_CHARS;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d199666.5651251294!2d-121.58334177520186!3d38.56165006739519!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x809ac672b28397f9%3A0x921f6aaa74197fdb!2sSacramento%2C%20CA%2C%20USA!5e0!3m2!1sen!2sbd!4v1647608789441!5m2!1sen!2sbd";

const EMAIL_PATTERN: &str =
    "^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\\.[A-Za-z0-9-]+)+$";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <header>
            <h2 class="h2 article-title">"Contact"</h2>
        </header>

        <section class="mapbox" data-mapbox="">
            <figure>
                <iframe
                    src=MAP_EMBED_URL
                    width="400"
                    height="300"
                    title="Location map"
                    {leptos::tachys::html::attribute::loading("lazy")}
                ></iframe>
            </figure>
        </section>

        <section class="contact-form">
            <h3 class="h3 form-title">"Contact Form"</h3>

            <form class="form" action="/api/contact" method="post" data-form="">
                <div class="input-wrapper">
                    <input
                        type="text"
                        name="fullname"
                        class="form-input"
                        placeholder="Full name"
                        required=true
                        autocomplete="name"
                        data-form-input=""
                    />
                    <input
                        type="email"
                        name="email"
                        class="form-input"
                        placeholder="Email address"
                        required=true
                        pattern=EMAIL_PATTERN
                        title="Enter a valid email address (example@domain.com)"
                        autocomplete="email"
                        data-form-input=""
                    />
                </div>

                <input
                    type="text"
                    name="company"
                    class="form-input form-input--hidden"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                />

                <textarea
                    name="message"
                    class="form-input"
                    placeholder="Your Message"
                    required=true
                    maxlength=MAX_MESSAGE_CHARS.to_string()
                    autocomplete="off"
                    data-form-input=""
                ></textarea>

                <button class="form-btn" type="submit" disabled=true data-form-btn="">
                    <span>"Send Message"</span>
                </button>
            </form>
        </section>

        <div
            class="contact-toast"
            data-contact-toast=""
            role="status"
            aria-live="polite"
            hidden=true
        >
            <span class="contact-toast__title" data-contact-toast-title=""></span>
            <span class="contact-toast__message" data-contact-toast-message=""></span>
        </div>
    }
}
