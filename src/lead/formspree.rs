use gloo_net::http::Request;

use super::form::LeadForm;
use super::intake::{IntakeReply, LeadIntake, TransportError};

/// Posts leads to a Formspree form endpoint.
pub struct FormspreeIntake {
    endpoint: String,
}

impl FormspreeIntake {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl LeadIntake for FormspreeIntake {
    async fn deliver(&self, lead: &LeadForm) -> Result<IntakeReply, TransportError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(lead)
            .map_err(|e| TransportError(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        // A body we can't read is treated like one without an error list.
        let body = response.text().await.unwrap_or_default();

        Ok(IntakeReply { status, body })
    }
}
