//! PromptConfig - Inputs of prompt construction

use chrono::NaiveDate;

use crate::domain::value_objects::{Gender, Length, Sign, Style};

/// Everything the prompt builder needs; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptConfig {
    pub style: Style,
    pub length: Length,
    pub sign: Sign,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            style: Style::Default,
            length: Length::Short,
            sign: Sign::Balance,
            gender: None,
            birth_date: None,
        }
    }
}
