use handlebars::Handlebars;
use serde::Serialize;

use super::languages::LANGUAGES;
use super::session::{Outcome, SessionState, MAX_CHARS};

pub const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>TransLingua - AI Translator</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; background: #f5f6fb; color: #222; }
h1 { text-align: center; color: #667eea; margin-bottom: 0; }
.tagline { text-align: center; color: #666; margin-top: .25rem; }
textarea { width: 100%; font-size: 16px; box-sizing: border-box; }
.languages { display: flex; gap: .75rem; align-items: end; margin: 1rem 0; }
.languages label { flex: 1; }
select { width: 100%; padding: .4rem; }
.count { font-size: 12px; color: #888; text-align: right; }
.notice { padding: .75rem; background: #fff4d6; border-radius: 6px; }
.translation { padding: 1.25rem; background: #f0f2f6; border-radius: 10px; white-space: pre-wrap; }
.error { padding: 1.25rem; background: #fde8e8; color: #9b1c1c; border-radius: 10px; white-space: pre-wrap; }
footer { text-align: center; color: #666; font-size: 12px; margin-top: 2rem; }
</style>
</head>
<body>
<h1>TransLingua</h1>
<p class="tagline">AI-Powered Language Translator</p>
<form method="post" action="/">
<label for="text">Enter text to translate:</label>
<textarea id="text" name="text" rows="6" maxlength="{{max_chars}}" placeholder="Type or paste your text here...">{{text}}</textarea>
<div class="count">Characters: {{char_count}}/{{max_chars}}</div>
<div class="languages">
<label>Source Language
<select name="source_language">
{{#each source_options}}<option value="{{name}}"{{#if selected}} selected{{/if}}>{{name}}</option>
{{/each}}</select>
</label>
<button type="submit" name="action" value="swap" title="Swap languages">&#8646;</button>
<label>Target Language
<select name="target_language">
{{#each target_options}}<option value="{{name}}"{{#if selected}} selected{{/if}}>{{name}}</option>
{{/each}}</select>
</label>
</div>
<button type="submit" name="action" value="translate">Translate</button>
</form>
{{#if notice}}<p class="notice">{{notice}}</p>{{/if}}
{{#if translation}}
<h3>Translated Text</h3>
<div class="translation">{{translation}}</div>
<button type="button" id="copy" onclick="navigator.clipboard.writeText(document.querySelector('.translation').innerText).then(function () { document.getElementById('copy').textContent = 'Copied!'; })">Copy</button>
{{/if}}
{{#if error}}
<h3>Translation failed</h3>
<div class="error">{{error}}</div>
{{/if}}
{{#if has_outcome}}
<form method="post" action="/">
<input type="hidden" name="source_language" value="{{source_language}}">
<input type="hidden" name="target_language" value="{{target_language}}">
<button type="submit" name="action" value="clear">Clear</button>
</form>
{{/if}}
<footer>Powered by Google Gemini AI &middot; TransLingua &copy; 2026</footer>
</body>
</html>
"##;

#[derive(Debug, Serialize)]
struct LanguageOption {
    name: &'static str,
    selected: bool,
}

/// Everything the page template needs, borrowed from one session.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    text: &'a str,
    char_count: usize,
    max_chars: usize,
    source_language: &'a str,
    target_language: &'a str,
    source_options: Vec<LanguageOption>,
    target_options: Vec<LanguageOption>,
    notice: Option<&'a str>,
    translation: Option<&'a str>,
    error: Option<&'a str>,
    has_outcome: bool,
}

fn options(selected: &str) -> Vec<LanguageOption> {
    LANGUAGES
        .iter()
        .map(|&name| LanguageOption {
            name,
            selected: name == selected,
        })
        .collect()
}

impl<'a> PageView<'a> {
    pub fn new(session: &'a SessionState, notice: Option<&'a str>) -> Self {
        let (translation, error) = match &session.outcome {
            Some(Outcome::Translated(text)) => (Some(text.as_str()), None),
            Some(Outcome::Failed(message)) => (None, Some(message.as_str())),
            None => (None, None),
        };
        Self {
            text: &session.text,
            char_count: session.text.chars().count(),
            max_chars: MAX_CHARS,
            source_language: &session.source_language,
            target_language: &session.target_language,
            source_options: options(&session.source_language),
            target_options: options(&session.target_language),
            notice,
            translation,
            error,
            has_outcome: session.outcome.is_some(),
        }
    }
}

/// Registry with the page template compiled in.
pub fn build_registry() -> Result<Handlebars<'static>, handlebars::TemplateError> {
    let mut registry = Handlebars::new();
    registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    Ok(registry)
}

pub fn render_page(
    registry: &Handlebars<'static>,
    view: &PageView<'_>,
) -> Result<String, handlebars::RenderError> {
    registry.render(PAGE_TEMPLATE_NAME, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(session: &SessionState, notice: Option<&str>) -> String {
        let registry = build_registry().unwrap();
        render_page(&registry, &PageView::new(session, notice)).unwrap()
    }

    #[test]
    fn test_default_page_selects_defaults() {
        let html = render(&SessionState::default(), None);
        assert!(html.contains(r#"<option value="English" selected>English</option>"#));
        assert!(html.contains(r#"<option value="French" selected>French</option>"#));
        assert!(html.contains("Characters: 0/5000"));
        assert!(!html.contains(r#"class="translation""#));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains(r#"value="clear""#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let session = SessionState {
            text: "<script>alert(1)</script>".to_string(),
            outcome: Some(Outcome::Translated("<b>hola</b>".to_string())),
            ..SessionState::default()
        };
        let html = render(&session, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;hola&lt;/b&gt;"));
    }

    #[test]
    fn test_copy_button_only_with_translation() {
        let translated = SessionState {
            outcome: Some(Outcome::Translated("Hola".to_string())),
            ..SessionState::default()
        };
        assert!(render(&translated, None).contains(r#"id="copy""#));

        let failed = SessionState {
            outcome: Some(Outcome::Failed("boom".to_string())),
            ..SessionState::default()
        };
        assert!(!render(&failed, None).contains(r#"id="copy""#));
        assert!(!render(&SessionState::default(), None).contains(r#"id="copy""#));
    }

    #[test]
    fn test_failure_renders_in_error_block() {
        let session = SessionState {
            outcome: Some(Outcome::Failed("quota exceeded".to_string())),
            ..SessionState::default()
        };
        let html = render(&session, None);
        assert!(html.contains(r#"<div class="error">quota exceeded</div>"#));
        assert!(!html.contains(r#"class="translation""#));
        assert!(html.contains(r#"value="clear""#));
    }

    #[test]
    fn test_notice_and_char_count() {
        let session = SessionState {
            text: "héllo".to_string(),
            ..SessionState::default()
        };
        let html = render(&session, Some("Please enter some text to translate."));
        assert!(html.contains("Characters: 5/5000"));
        assert!(html.contains(r#"<p class="notice">Please enter some text to translate.</p>"#));
    }
}
