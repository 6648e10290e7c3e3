//! Prompt domain
//!
//! Persona instructions and the two-message prompt sent for each consultation.

pub mod message;
mod template;

pub use template::PersonaPromptTemplate;

use crate::core::persona::Persona;
use message::Message;

/// The prompt for one consultation (Value Object)
///
/// Always exactly two messages: the persona's system instruction followed
/// by the user's question. Built fresh per request and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationPrompt {
    system: Message,
    user: Message,
}

impl ConsultationPrompt {
    /// Build the prompt for `question` addressed to `persona`
    ///
    /// The question is passed through untouched.
    pub fn new(persona: &Persona, question: impl Into<String>) -> Self {
        Self {
            system: Message::system(PersonaPromptTemplate::system_instruction(persona)),
            user: Message::user(question),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system.content
    }

    pub fn question(&self) -> &str {
        &self.user.content
    }

    /// Messages in wire order: system, then user
    pub fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::message::Role;

    #[test]
    fn test_message_order() {
        let prompt = ConsultationPrompt::new(&Persona::ElderCare, "Which walker is best?");
        let [system, user] = prompt.messages();
        assert_eq!(system.role, Role::System);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Which walker is best?");
    }

    #[test]
    fn test_question_is_literal() {
        let raw = "  How do I get my toddler to sleep earlier?\n\n(she is 2)  ";
        let prompt = ConsultationPrompt::new(&Persona::Childcare, raw);
        assert_eq!(prompt.question(), raw);
    }

    #[test]
    fn test_fallback_instruction() {
        let persona = Persona::Unrecognized("Z".to_string());
        let prompt = ConsultationPrompt::new(&persona, "hi");
        assert_eq!(
            prompt.system_instruction(),
            PersonaPromptTemplate::GENERIC_ASSISTANT
        );
    }
}
