//! Contact endpoint client.

use gloo_net::http::Request;
use portfolio_shared::contact::{ContactForm, SubmitOutcome};

use crate::config::CONTACT_ENDPOINT;

/// 提交联系表单；响应体不解析，只看状态码
pub async fn submit_contact(form: &ContactForm) -> SubmitOutcome {
    match post_contact(form).await {
        Ok(status) => SubmitOutcome::from_status(status),
        Err(e) => SubmitOutcome::TransportError(e),
    }
}

async fn post_contact(form: &ContactForm) -> Result<u16, String> {
    let response = Request::post(CONTACT_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    Ok(response.status())
}
