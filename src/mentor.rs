// src/mentor.rs
use std::collections::HashMap;

/// A coaching persona. The system instruction sent upstream is composed from
/// these fields, so the persona table stays data rather than string soup.
#[derive(Debug, Clone)]
pub struct Mentor {
    pub name: &'static str,
    pub focus: &'static str,
    pub max_words: usize,
    pub closing: &'static str,
}

impl Mentor {
    pub fn system_instruction(&self) -> String {
        format!(
            "You are {}. {} Keep responses under {} words. End with {}.",
            self.name, self.focus, self.max_words, self.closing
        )
    }
}

pub const DEFAULT_MENTOR_ID: &str = "akshay";

/// Immutable mentor table, built once at startup and shared read-only.
pub struct MentorRegistry {
    mentors: HashMap<&'static str, Mentor>,
}

impl MentorRegistry {
    pub fn new() -> Self {
        let mut mentors = HashMap::new();
        mentors.insert(
            "akshay",
            Mentor {
                name: "Akshay Pratap Singh",
                focus: "Help users discover their own truth through reflective questions.",
                max_words: 50,
                closing: "one open-ended question",
            },
        );
        mentors.insert(
            "deepak",
            Mentor {
                name: "Deepak Chopra",
                focus: "Focus on immediate next steps.",
                max_words: 50,
                closing: "an action-oriented question",
            },
        );
        mentors.insert(
            "anmol",
            Mentor {
                name: "Anmol Singh",
                focus: "Help separate controllable from uncontrollable factors.",
                max_words: 50,
                closing: "a reflective question",
            },
        );
        mentors.insert(
            "neetu",
            Mentor {
                name: "Neetu Mann",
                focus: "Guide toward balanced, virtuous decisions.",
                max_words: 50,
                closing: "a question about balance",
            },
        );

        Self { mentors }
    }

    /// Case-sensitive exact lookup. Anything unknown, including a missing id,
    /// resolves to the default mentor; selection never fails.
    pub fn resolve(&self, id: Option<&str>) -> &Mentor {
        id.and_then(|id| self.mentors.get(id))
            .unwrap_or_else(|| &self.mentors[DEFAULT_MENTOR_ID])
    }

    pub fn get(&self, id: &str) -> Option<&Mentor> {
        self.mentors.get(id)
    }
}

impl Default for MentorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_their_persona() {
        let registry = MentorRegistry::new();
        assert_eq!(registry.resolve(Some("deepak")).name, "Deepak Chopra");
        assert_eq!(registry.resolve(Some("anmol")).name, "Anmol Singh");
        assert_eq!(registry.resolve(Some("neetu")).name, "Neetu Mann");
    }

    #[test]
    fn unknown_or_missing_id_falls_back_to_default() {
        let registry = MentorRegistry::new();
        assert_eq!(registry.resolve(None).name, "Akshay Pratap Singh");
        assert_eq!(registry.resolve(Some("socrates")).name, "Akshay Pratap Singh");
        assert_eq!(registry.resolve(Some("")).name, "Akshay Pratap Singh");
        // lookup is case-sensitive
        assert_eq!(registry.resolve(Some("Deepak")).name, "Akshay Pratap Singh");
    }

    #[test]
    fn instruction_text_matches_the_registered_personas() {
        let registry = MentorRegistry::new();
        assert_eq!(
            registry.resolve(Some("akshay")).system_instruction(),
            "You are Akshay Pratap Singh. Help users discover their own truth through reflective questions. Keep responses under 50 words. End with one open-ended question."
        );
        assert_eq!(
            registry.resolve(Some("deepak")).system_instruction(),
            "You are Deepak Chopra. Focus on immediate next steps. Keep responses under 50 words. End with an action-oriented question."
        );
        assert_eq!(
            registry.resolve(Some("anmol")).system_instruction(),
            "You are Anmol Singh. Help separate controllable from uncontrollable factors. Keep responses under 50 words. End with a reflective question."
        );
        assert_eq!(
            registry.resolve(Some("neetu")).system_instruction(),
            "You are Neetu Mann. Guide toward balanced, virtuous decisions. Keep responses under 50 words. End with a question about balance."
        );
    }
}
