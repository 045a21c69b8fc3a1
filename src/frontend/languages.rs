/// Languages offered by the form, in display order.
pub const LANGUAGES: [&str; 16] = [
    "English",
    "Spanish",
    "French",
    "German",
    "Chinese",
    "Hindi",
    "Japanese",
    "Korean",
    "Portuguese",
    "Italian",
    "Russian",
    "Arabic",
    "Dutch",
    "Turkish",
    "Polish",
    "Vietnamese",
];

pub const DEFAULT_SOURCE: &str = "English";
pub const DEFAULT_TARGET: &str = "French";

pub fn is_supported(name: &str) -> bool {
    LANGUAGES.contains(&name)
}
