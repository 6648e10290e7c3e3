//! System instructions for each persona

use crate::core::persona::Persona;

/// Fixed system instructions, one per persona
pub struct PersonaPromptTemplate;

impl PersonaPromptTemplate {
    pub const CHILDCARE_EXPERT: &'static str =
        "You are an expert in child-rearing; answer childcare questions experientially and helpfully.";

    pub const ELDER_CARE_EXPERT: &'static str =
        "You are an expert in elder care; answer caregiving questions experientially and helpfully.";

    /// Used for any selector other than the two experts
    pub const GENERIC_ASSISTANT: &'static str = "You are a helpful assistant.";

    /// System instruction for `persona`
    pub fn system_instruction(persona: &Persona) -> &'static str {
        match persona {
            Persona::Childcare => Self::CHILDCARE_EXPERT,
            Persona::ElderCare => Self::ELDER_CARE_EXPERT,
            Persona::Unrecognized(_) => Self::GENERIC_ASSISTANT,
        }
    }
}
