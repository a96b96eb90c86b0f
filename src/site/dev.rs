//! Developer settings panel, served at `/dev` when enabled.
//!
//! The toggle state lives in browser local storage under
//! `contact-send-enabled`; `site.js` syncs the switch and note text.

use leptos::prelude::*;

#[component]
pub fn DevPanel() -> impl IntoView {
    view! {
        <div class="dev-settings">
            <header class="dev-settings__header">
                <div>
                    <h2 class="h2 article-title">"Developer Settings"</h2>
                    <p class="dev-settings__subtitle">"Local toggles for testing the site."</p>
                </div>
                <a class="dev-settings__back" href="/">"Back to site"</a>
            </header>

            <div class="dev-settings__card">
                <div class="dev-settings__row">
                    <div>
                        <p class="dev-settings__label">"Send contact emails"</p>
                        <p class="dev-settings__hint">
                            "Disable to avoid using API credits while testing."
                        </p>
                    </div>
                    <button
                        type="button"
                        class="dev-toggle is-on"
                        role="switch"
                        aria-checked="true"
                        data-dev-toggle=""
                    >
                        <span class="dev-toggle__track">
                            <span class="dev-toggle__thumb"></span>
                        </span>
                        <span class="dev-toggle__text" data-dev-toggle-text="">"On"</span>
                    </button>
                </div>

                <p class="dev-settings__note" data-dev-toggle-note="">
                    "Emails will be sent when the contact form submits."
                </p>
            </div>
        </div>
    }
}
