// =============================================================================
// Gravity Web - Footer Component
// =============================================================================
// Global footer with useful links, social links and contact details
// =============================================================================

use leptos::prelude::*;

use crate::mailer::{self, MailMessage, CONTACT_EMAIL};

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    // The email link composes a fixed enquiry through the same delivery
    // path as the contact form
    let send_enquiry = move |_| mailer::deliver(&MailMessage::enquiry());

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top section">
                    <div class="footer-brand">
                        <p class="footer-list-title">"About Gravity"</p>
                        <p class="footer-text">
                            <span class="has-before">
                                "Gravity — Creating websites that are easy, reliable, and 100% secure."
                            </span>
                            "We design, develop, and maintain high-performance websites that help \
                             your business grow with confidence, creativity, and innovation."
                        </p>
                    </div>

                    <ul class="footer-list">
                        <li><p class="footer-list-title">"Useful Links"</p></li>
                        <li><a href="#home" class="footer-link">"Home"</a></li>
                        <li><a href="#our-services" class="footer-link">"Our Services"</a></li>
                        <li><a href="#features" class="footer-link">"Features"</a></li>
                        <li><a href="#contact" class="footer-link">"Contact"</a></li>
                    </ul>

                    <ul class="footer-list">
                        <li><p class="footer-list-title">"Social Links"</p></li>
                        <li>
                            <a href="https://x.com/_GServices_" class="footer-link social-link">
                                <img src="/assets/icons/twitter-x.svg" alt="" />
                                <span class="span">"X (Twitter)"</span>
                            </a>
                        </li>
                        <li>
                            <a href="https://www.instagram.com/gravityservices.info/" class="footer-link social-link">
                                <img src="/assets/icons/instagram.svg" alt="" />
                                <span class="span">"Instagram"</span>
                            </a>
                        </li>
                        <li>
                            <a href="https://www.facebook.com/share/1FTLGL7Cgv/" class="footer-link social-link">
                                <img src="/assets/icons/facebook.svg" alt="" />
                                <span class="span">"Facebook"</span>
                            </a>
                        </li>
                    </ul>

                    <ul class="footer-list">
                        <li><p class="footer-list-title">"Contact Us"</p></li>
                        <li class="phone-numbers">
                            <a href="tel:+919142003626" class="footer-link">"+91-9142003626"</a>
                            <a href="tel:+919508414506" class="footer-link">"+91-9508414506"</a>
                        </li>
                        <li>
                            <button class="footer-link footer-mail-link" on:click=send_enquiry>
                                {CONTACT_EMAIL}
                            </button>
                        </li>
                    </ul>
                </div>

                <div class="footer-bottom">
                    <p class="copyright">
                        "© 2025 Gravity. All rights reserved. Designed and developed by Gravity."
                    </p>
                </div>
            </div>
        </footer>
    }
}
