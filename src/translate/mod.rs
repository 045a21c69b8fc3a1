pub mod interface;
pub mod prompt;
pub mod gemini;
pub mod openai_compatible;
pub mod factory;

#[cfg(test)]
pub(crate) mod test_support;

pub use interface::*;
pub use factory::TranslationClientFactory;
