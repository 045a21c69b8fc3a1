/// Builds the instruction sent to the model. Field values are interpolated
/// as-is, without escaping.
pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Translate the following text from {} to {}. \
         Provide only the translation without any additional explanation or context.\n\n\
         Text: {}",
        source_language, target_language, text
    )
}
