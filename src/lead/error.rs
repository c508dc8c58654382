use thiserror::Error;

const OFFLINE_MESSAGE: &str = "Você parece estar offline. Por favor, verifique sua conexão com a internet e tente novamente.";
const INCOMPLETE_MESSAGE: &str = "Por favor, preencha todos os campos.";
const GENERIC_MESSAGE: &str = "Ocorreu um erro ao enviar o formulário. Tente novamente.";
// Most fetch failures against Formspree are the browser blocking the response
// because the site's domain is missing from the form's allowlist. Only a hint.
const TRANSPORT_MESSAGE: &str = "Erro de rede. Pode ser um erro de CORS. Verifique se o domínio do seu site está na lista de permissões nas configurações do seu formulário Formspree.";

/// Every way a lead submission can end without reaching the thank-you page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("navigator reports no connectivity")]
    Offline,
    #[error("one or more fields are blank")]
    Incomplete,
    /// The intake rejected the lead and said why.
    #[error("intake rejected the lead: {0}")]
    Rejected(String),
    /// Non-2xx reply without a usable error list.
    #[error("intake returned status {0}")]
    Generic(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Offline => OFFLINE_MESSAGE.to_string(),
            SubmitError::Incomplete => INCOMPLETE_MESSAGE.to_string(),
            SubmitError::Rejected(reasons) => reasons.clone(),
            SubmitError::Generic(_) => GENERIC_MESSAGE.to_string(),
            SubmitError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_hint_differs_from_generic_message() {
        let transport = SubmitError::Transport("TypeError: Failed to fetch".to_string());
        let generic = SubmitError::Generic(500);

        assert_ne!(transport.user_message(), generic.user_message());
        assert!(transport.user_message().contains("CORS"));
    }

    #[test]
    fn rejected_shows_the_intake_reasons_verbatim() {
        let err = SubmitError::Rejected("Required, Invalid".to_string());
        assert_eq!(err.user_message(), "Required, Invalid");
    }

    #[test]
    fn display_keeps_the_underlying_cause() {
        let err = SubmitError::Transport("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "request failed: TypeError: Failed to fetch");
    }
}
