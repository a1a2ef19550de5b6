use std::str::FromStr;

use crate::Domain;

pub const MAX_CONTEXT_CHARS: usize = 2000;

/// Which template wraps the context and question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Context,
    Persona,
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "context" => Ok(Self::Context),
            "persona" => Ok(Self::Persona),
            other => Err(format!("unknown prompt style: {other}")),
        }
    }
}

/// First `MAX_CONTEXT_CHARS` characters of `context`.
pub fn truncate_context(context: &str) -> &str {
    match context.char_indices().nth(MAX_CONTEXT_CHARS) {
        Some((byte_idx, _)) => &context[..byte_idx],
        None => context,
    }
}

pub fn render_prompt(context: &str, query: &str) -> String {
    format!(
        "You are an expert in {context}. Based on the following context, provide an accurate response to the query:\n\n\
         Context: {context}\n\
         Query: {query}\n\n\
         Answer:"
    )
}

pub fn render_persona_prompt(domain: Domain, context: &str, query: &str) -> String {
    format!(
        "You are an expert in the {domain} domain. Using the following information, provide a clear and accurate answer to the question:\n\n\
         Context: {context}\n\n\
         Question: {query}\n\n\
         Answer:"
    )
}

impl PromptStyle {
    pub fn render(&self, domain: Domain, context: &str, query: &str) -> String {
        match self {
            Self::Context => render_prompt(context, query),
            Self::Persona => render_persona_prompt(domain, context, query),
        }
    }
}
