use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use twilio::twiml::VoiceResponse;

/// Responder that serves a TwiML document as `text/xml`.
#[derive(Debug, Clone)]
pub struct Twiml(pub VoiceResponse);

impl From<VoiceResponse> for Twiml {
    fn from(response: VoiceResponse) -> Self {
        Self(response)
    }
}

impl IntoResponse for Twiml {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, "text/xml")], self.0.to_xml()).into_response()
    }
}
