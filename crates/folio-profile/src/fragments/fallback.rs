use crate::data::{ProfileData, plain_email};

/// The apology sent in place of an answer when the upstream model cannot be
/// reached. Rendered once at start-up; the text never varies per request.
pub fn fallback_message(profile: &ProfileData) -> String {
    let first = profile.identity.first_name();
    let email = plain_email(&profile.identity.email);

    format!(
        "I apologize, but I'm currently unable to respond. Please feel free to explore the \
         website to learn more about {first}'s experience, projects, and skills. You can also \
         reach out directly via email at {email} or connect on GitHub."
    )
}
