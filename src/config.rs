/// Formspree form that receives the leads.
const DEFAULT_INTAKE_URL: &str = "https://formspree.io/f/mwpaeqog";

pub fn get_intake_url() -> &'static str {
    match option_env!("ITUK_INTAKE_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_INTAKE_URL,
    }
}

/// Id of the section holding the signup form, target of every CTA button.
pub const SIGNUP_ANCHOR: &str = "final-cta";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_url_is_an_https_endpoint() {
        assert!(get_intake_url().starts_with("https://"));
    }
}
