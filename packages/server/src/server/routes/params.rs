use serde::Deserialize;

/// The subset of Twilio's voice webhook parameters the gate reads.
///
/// Arrives as a query string on GET and as a urlencoded form on POST;
/// everything else Twilio sends is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallParams {
    /// Caller's phone number
    #[serde(rename = "From")]
    pub from: Option<String>,

    /// Digits collected by `<Gather>`
    #[serde(rename = "Digits")]
    pub digits: Option<String>,

    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
}

impl CallParams {
    pub fn caller(&self) -> Option<&str> {
        self.from.as_deref().filter(|from| !from.is_empty())
    }

    /// Gathered digits; an empty `Digits` counts as nothing entered.
    pub fn digits(&self) -> Option<&str> {
        self.digits.as_deref().filter(|digits| !digits.is_empty())
    }

    pub fn call_sid(&self) -> &str {
        self.call_sid.as_deref().unwrap_or("-")
    }
}
