use twilio::twiml::{Conference, Dial};

/// How a caller's presence affects the conference lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    /// Starts the conference on entry and ends it on exit.
    Moderator,
    /// Joins passively; neither starts nor stops the conference.
    Participant,
}

impl ParticipantRole {
    pub fn for_caller(caller: &str, moderator: &str) -> Self {
        if caller == moderator {
            ParticipantRole::Moderator
        } else {
            ParticipantRole::Participant
        }
    }
}

/// Build the `<Dial><Conference>` directive for a verified caller.
pub fn conference_directive(caller: &str, moderator: &str, conference_name: &str) -> Dial {
    let conference = match ParticipantRole::for_caller(caller, moderator) {
        ParticipantRole::Moderator => Conference::new(conference_name)
            .start_conference_on_enter(true)
            .end_conference_on_exit(true),
        ParticipantRole::Participant => {
            Conference::new(conference_name).start_conference_on_enter(false)
        }
    };

    Dial::conference(conference)
}
