use supportdb_core::types::{Profile, DEFAULT_PROFILE_NAME};

/// Openings that read naturally after a greeting.
const GREETABLE_OPENINGS: &[&str] = &["I'd be happy", "Thank you", "I understand"];

/// Greet the user by name when the profile is real and the answer opens with
/// a greetable phrase. Answers already mentioning the name are left alone.
pub fn personalize(text: &str, profile: &Profile) -> String {
    let name = profile.name.as_str();
    if name.is_empty() || name == DEFAULT_PROFILE_NAME || text.contains(name) {
        return text.to_string();
    }
    if GREETABLE_OPENINGS.iter().any(|opening| text.starts_with(opening)) {
        return format!("Hi {name}! {text}");
    }
    text.to_string()
}
