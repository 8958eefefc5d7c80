//! TwiML voice markup.
//!
//! Only the verbs a gated conference line needs are modelled: `<Say>`,
//! `<Gather>`, `<Redirect>` and `<Dial><Conference>`. Attributes are written
//! in the order they were set and unset optional attributes are left out.

use std::fmt::{self, Write};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Top-level `<Response>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Say(Say),
    Gather(Gather),
    Redirect(Redirect),
    Dial(Dial),
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say(Say::new(text)));
        self
    }

    pub fn gather(mut self, gather: Gather) -> Self {
        self.verbs.push(Verb::Gather(gather));
        self
    }

    pub fn redirect(mut self, url: impl Into<String>) -> Self {
        self.verbs.push(Verb::Redirect(Redirect::new(url)));
        self
    }

    pub fn dial(mut self, dial: Dial) -> Self {
        self.verbs.push(Verb::Dial(dial));
        self
    }

    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VoiceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(XML_DECLARATION)?;
        if self.verbs.is_empty() {
            return f.write_str("<Response />");
        }
        f.write_str("<Response>")?;
        for verb in &self.verbs {
            verb.write(f)?;
        }
        f.write_str("</Response>")
    }
}

impl Verb {
    fn write(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Verb::Say(say) => say.write(out),
            Verb::Gather(gather) => gather.write(out),
            Verb::Redirect(redirect) => redirect.write(out),
            Verb::Dial(dial) => dial.write(out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Say {
    pub text: String,
}

impl Say {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    fn write(&self, out: &mut impl Write) -> fmt::Result {
        Element::new("Say").text(out, &self.text)
    }
}

/// Collects DTMF digits and posts them to `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gather {
    pub num_digits: Option<u32>,
    pub action: Option<String>,
    pub prompts: Vec<Say>,
}

impl Gather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_digits(mut self, num_digits: u32) -> Self {
        self.num_digits = Some(num_digits);
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.prompts.push(Say::new(text));
        self
    }

    fn write(&self, out: &mut impl Write) -> fmt::Result {
        let mut element = Element::new("Gather");
        if let Some(n) = self.num_digits {
            element = element.attr("numDigits", n.to_string());
        }
        if let Some(action) = &self.action {
            element = element.attr("action", action.clone());
        }

        if self.prompts.is_empty() {
            return element.empty(out);
        }
        element.open(out)?;
        for prompt in &self.prompts {
            prompt.write(out)?;
        }
        element.close(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn write(&self, out: &mut impl Write) -> fmt::Result {
        Element::new("Redirect").text(out, &self.url)
    }
}

/// `<Dial>` wrapping a single `<Conference>` noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    pub conference: Conference,
}

impl Dial {
    pub fn conference(conference: Conference) -> Self {
        Self { conference }
    }

    fn write(&self, out: &mut impl Write) -> fmt::Result {
        let element = Element::new("Dial");
        element.open(out)?;
        self.conference.write(out)?;
        element.close(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    pub name: String,
    pub start_conference_on_enter: Option<bool>,
    pub end_conference_on_exit: Option<bool>,
}

impl Conference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_conference_on_enter: None,
            end_conference_on_exit: None,
        }
    }

    pub fn start_conference_on_enter(mut self, value: bool) -> Self {
        self.start_conference_on_enter = Some(value);
        self
    }

    pub fn end_conference_on_exit(mut self, value: bool) -> Self {
        self.end_conference_on_exit = Some(value);
        self
    }

    fn write(&self, out: &mut impl Write) -> fmt::Result {
        let mut element = Element::new("Conference");
        if let Some(start) = self.start_conference_on_enter {
            element = element.attr("startConferenceOnEnter", start.to_string());
        }
        if let Some(end) = self.end_conference_on_exit {
            element = element.attr("endConferenceOnExit", end.to_string());
        }
        element.text(out, &self.name)
    }
}

struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
}

impl Element {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    fn attr(mut self, key: &'static str, value: String) -> Self {
        self.attrs.push((key, value));
        self
    }

    fn write_start(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(out, " {}=\"{}\"", key, escape(value))?;
        }
        Ok(())
    }

    fn open(&self, out: &mut impl Write) -> fmt::Result {
        self.write_start(out)?;
        out.write_char('>')
    }

    fn close(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "</{}>", self.name)
    }

    fn empty(&self, out: &mut impl Write) -> fmt::Result {
        self.write_start(out)?;
        out.write_str(" />")
    }

    fn text(&self, out: &mut impl Write, body: &str) -> fmt::Result {
        self.open(out)?;
        out.write_str(&escape(body))?;
        self.close(out)
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
