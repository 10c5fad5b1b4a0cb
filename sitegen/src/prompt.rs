//! Instruction preamble prepended to every user description.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

/// Fixed instructions that pin the model's output format.
pub const PREAMBLE: &str = "\
You are an expert front-end developer. Build the website described below.

Rules:
- Respond with ONE complete, self-contained HTML document, starting with <!DOCTYPE html> and ending with </html>.
- Put all CSS and JavaScript inline in the document. You may load Tailwind CSS from https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4.
- Make the layout responsive so it works on desktop, tablet and mobile widths.
- Use realistic placeholder content instead of lorem ipsum where possible.
- Do NOT include explanations, comments about the code, or markdown outside the document.

Website description:
";

/// A composed request, ready to hand to a generation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    text: String,
}

impl PromptRequest {
    /// The full text sent to the model.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Concatenate [`PREAMBLE`] and the user's description. Never fails.
#[must_use]
pub fn compose(description: &str) -> PromptRequest {
    let mut text = String::with_capacity(PREAMBLE.len() + description.len());
    text.push_str(PREAMBLE);
    text.push_str(description);
    PromptRequest { text }
}
