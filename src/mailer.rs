// =============================================================================
// Gravity Web - Mail Composition & Delivery
// =============================================================================
// Table of Contents:
// 1. Message Composition
// 2. Delivery Targets
// 3. Device Classification
// 4. Dispatch
// =============================================================================

use urlencoding::encode;

use crate::form::ContactForm;
use crate::utils;

/// Where contact mail is delivered.
pub const CONTACT_EMAIL: &str = "gravity.services.info@gmail.com";

/// Gmail's compose-a-draft endpoint; `to`, `su` and `body` are query params.
const GMAIL_COMPOSE_ENDPOINT: &str = "https://mail.google.com/mail/?view=cm&fs=1";

// -----------------------------------------------------------------------------
// 1. Message Composition
// -----------------------------------------------------------------------------

/// A composed email, ready to be URL-encoded into a delivery target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// Compose the contact-form message. Field values are embedded verbatim;
    /// encoding happens only when a delivery URL is built.
    pub fn from_form(form: &ContactForm) -> Self {
        let subject = format!("New message from {}", form.name);
        let body = format!(
            "Hello,\n\n\
             You have a new message from your portfolio contact form.\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Contact Number: {number}\n\n\
             Message:\n\
             {message}\n\n\
             Regards,\n\
             {name}",
            name = form.name,
            email = form.email,
            number = form.number,
            message = form.message,
        );

        Self { subject, body }
    }

    /// The fixed enquiry message behind the footer's email link.
    pub fn enquiry() -> Self {
        Self {
            subject: "Service Enquiry".to_string(),
            body: "Hello Gravity Services Team,\n\n\
                   I am interested in your software development and IT solutions. \
                   Please provide more details about your services.\n\n\
                   Thank you."
                .to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Delivery Targets
// -----------------------------------------------------------------------------

/// Gmail compose URL that pre-fills a draft in a webmail tab.
pub fn gmail_compose_url(to: &str, message: &MailMessage) -> String {
    format!(
        "{GMAIL_COMPOSE_ENDPOINT}&to={to}&su={}&body={}",
        encode(&message.subject),
        encode(&message.body),
    )
}

/// `mailto:` link that invokes the OS's registered mail handler.
pub fn mailto_url(to: &str, message: &MailMessage) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode(&message.subject),
        encode(&message.body),
    )
}

/// How a message will reach the platform's mail handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Navigate the current context to a `mailto:` link.
    MailHandler(String),
    /// Open the webmail compose URL in a new browsing context.
    WebmailTab(String),
}

// -----------------------------------------------------------------------------
// 3. Device Classification
// -----------------------------------------------------------------------------

/// Coarse device class derived from the user-agent string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    const MOBILE_MARKERS: [&'static str; 4] = ["android", "iphone", "ipad", "ipod"];

    /// Case-insensitive substring check against the known mobile markers.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        if Self::MOBILE_MARKERS
            .iter()
            .any(|marker| user_agent.contains(marker))
        {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classify the browser this code is running in.
    pub fn current() -> Self {
        Self::from_user_agent(&utils::user_agent())
    }
}

// -----------------------------------------------------------------------------
// 4. Dispatch
// -----------------------------------------------------------------------------

/// Resolve the delivery target for a message on the given device class.
/// Mobile devices hand off to the OS mail handler; desktops get a webmail tab.
pub fn plan_delivery(device: DeviceClass, message: &MailMessage) -> Delivery {
    match device {
        DeviceClass::Mobile => Delivery::MailHandler(mailto_url(CONTACT_EMAIL, message)),
        DeviceClass::Desktop => Delivery::WebmailTab(gmail_compose_url(CONTACT_EMAIL, message)),
    }
}

/// Execute a delivery plan. Fire and forget: delivery is entirely delegated
/// to the platform's mail handling, so there is no confirmation or retry.
pub fn dispatch(delivery: &Delivery) {
    match delivery {
        Delivery::MailHandler(url) => {
            log::info!("handing message off to the OS mail handler");
            utils::navigate_to(url);
        }
        Delivery::WebmailTab(url) => {
            log::info!("opening webmail compose in a new tab");
            utils::open_in_new_tab(url);
        }
    }
}

/// Compose-and-send path used by the UI.
pub fn deliver(message: &MailMessage) {
    dispatch(&plan_delivery(DeviceClass::current(), message));
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const MAC_UA: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

    fn sample_message() -> MailMessage {
        MailMessage::from_form(&ContactForm {
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            number: "9876543210".to_string(),
            message: "I would like a quote please".to_string(),
        })
    }

    #[test]
    fn test_compose_subject_and_body() {
        let message = sample_message();

        assert_eq!(message.subject, "New message from Alice Smith");
        assert!(message.body.starts_with("Hello,\n"));
        assert!(message.body.contains("Name: Alice Smith"));
        assert!(message.body.contains("Email: alice@example.com"));
        assert!(message.body.contains("Contact Number: 9876543210"));
        assert!(message.body.contains("Message:\nI would like a quote please"));
        assert!(message.body.ends_with("Regards,\nAlice Smith"));
    }

    #[test]
    fn test_gmail_compose_url_encodes_params() {
        let url = gmail_compose_url(CONTACT_EMAIL, &sample_message());

        assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1"));
        assert!(url.contains("&to=gravity.services.info@gmail.com"));
        assert!(url.contains("&su=New%20message%20from%20Alice%20Smith"));
        // Newlines in the body template must be percent-encoded
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_mailto_url_encodes_params() {
        let url = mailto_url(CONTACT_EMAIL, &sample_message());

        assert!(url.starts_with("mailto:gravity.services.info@gmail.com?subject="));
        assert!(url.contains("subject=New%20message%20from%20Alice%20Smith"));
        assert!(url.contains("&body=Hello%2C%0A"));
    }

    #[test]
    fn test_device_class_from_user_agent() {
        assert_eq!(DeviceClass::from_user_agent(IPHONE_UA), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(MAC_UA), DeviceClass::Desktop);

        // Markers match case-insensitively
        assert_eq!(
            DeviceClass::from_user_agent("some ANDROID browser"),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::from_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::from_user_agent("Mozilla/5.0 (iPod touch)"),
            DeviceClass::Mobile
        );
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_delivery_plan_routing() {
        let message = sample_message();

        match plan_delivery(DeviceClass::Mobile, &message) {
            Delivery::MailHandler(url) => assert!(url.starts_with("mailto:")),
            other => panic!("mobile should route to the mail handler, got {other:?}"),
        }

        match plan_delivery(DeviceClass::Desktop, &message) {
            Delivery::WebmailTab(url) => {
                assert!(url.starts_with("https://mail.google.com/mail/"))
            }
            other => panic!("desktop should route to webmail, got {other:?}"),
        }
    }

    #[test]
    fn test_enquiry_preset() {
        let message = MailMessage::enquiry();
        assert_eq!(message.subject, "Service Enquiry");
        assert!(message.body.starts_with("Hello Gravity Services Team,"));
    }
}
