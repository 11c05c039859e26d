//! HTML rendering for the translation form.

use std::fmt::Write as _;

use crate::translation::{EXAMPLES, TranslationDirection};

pub const TITLE: &str = "NusaAI Translator";

const DESCRIPTION: &str = r"
<h2>Getting Started</h2>
<p>To start using Nusa AI Translator, simply input your text in the text box and select the
desired translation direction between Balinese and English.</p>
";

const ARTICLE: &str = r#"
<h2>Features</h2>
<ul>
  <li><strong>Alpha Version (v0.1)</strong>: Currently supports translation between Balinese and English.</li>
  <li><strong>Accurate Translations</strong>: Leverages the power of fine-tuned LLMs to provide contextually appropriate translations.</li>
</ul>

<h2>Benchmark</h2>
<p>Performance comparison of Nusa AI Translator with other models in translating between
Balinese (ban) and English (en) in the <a href="https://en.wikipedia.org/wiki/BLEU">BLEU metric</a>:</p>
<table>
  <thead><tr><th>Model</th><th>Ban to En</th><th>En to Ban</th></tr></thead>
  <tbody>
    <tr><td>GPT-3.5-turbo-0125</td><td>18.28</td><td>7.20</td></tr>
    <tr><td>GPT-4o</td><td>24.04</td><td>5.24</td></tr>
    <tr><td><strong>Nusa-7b-ban</strong></td><td><strong>28.69</strong></td><td><strong>8.09</strong></td></tr>
  </tbody>
</table>
<p>(more benchmarks coming soon!)</p>

<h2>Mission</h2>
<p>Our goal is to provide a tool that gives 'no boundaries for all languages in Indonesia',
ensuring that everyone, regardless of their linguistic background, can access and enjoy the
benefits of the digital world.</p>

<h2>Future Updates</h2>
<p>Future versions will include support for more Indonesian dialects, improving and enriching
communication across different regions of Indonesia.</p>

<h2>Feedback</h2>
<p>Your feedback is valuable to us! Please let us know how we can improve your experience.</p>
"#;

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; box-sizing: border-box; font: inherit; }
.notice { background: #fde8e8; border: 1px solid #e0a0a0; padding: .5rem 1rem; border-radius: 4px; }
table { border-collapse: collapse; }
td, th { border: 1px solid #ccc; padding: .25rem .75rem; }
";

/// What the form currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub source_text: String,
    pub direction: TranslationDirection,
    pub output: String,
    /// User-visible error, if the last submission failed.
    pub notice: Option<String>,
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render(view: &PageView) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{TITLE}</h1>\n"
    );
    html.push_str(DESCRIPTION);

    if let Some(notice) = &view.notice {
        let _ = writeln!(html, "<p class=\"notice\" role=\"alert\">{}</p>", escape(notice));
    }

    // Button stays disabled until the response page replaces this one.
    html.push_str(
        "<form method=\"post\" action=\"/\" \
         onsubmit=\"this.querySelector('button').disabled = true\">\n",
    );
    // Parsers drop the first newline after `<textarea>`; the extra one
    // keeps a leading newline in the content.
    let _ = writeln!(
        html,
        "<label for=\"source_text\">Source Sentence</label>\n\
         <textarea id=\"source_text\" name=\"source_text\" rows=\"5\">\n{}</textarea>",
        escape(&view.source_text)
    );

    html.push_str("<fieldset>\n<legend>Translation Direction</legend>\n");
    for direction in TranslationDirection::ALL {
        let checked = if direction == view.direction { " checked" } else { "" };
        let _ = writeln!(
            html,
            "<label><input type=\"radio\" name=\"direction\" value=\"{code}\"{checked}> {label}</label>",
            code = escape(&direction.code()),
            label = escape(&direction.label()),
        );
    }
    html.push_str("</fieldset>\n<button type=\"submit\">Submit</button>\n");

    let _ = writeln!(
        html,
        "<label for=\"output\">Translated Sentence</label>\n\
         <textarea id=\"output\" name=\"previous_output\" rows=\"5\" readonly>\n{}</textarea>",
        escape(&view.output)
    );
    html.push_str("</form>\n");

    html.push_str("<h2>Examples</h2>\n<ul class=\"examples\">\n");
    for (index, example) in EXAMPLES.iter().enumerate() {
        let _ = writeln!(
            html,
            "<li><a href=\"/?example={index}\">{}</a> <small>{}</small></li>",
            escape(example.source_text),
            escape(&example.direction.label()),
        );
    }
    html.push_str("</ul>\n");

    html.push_str(ARTICLE);
    html.push_str("</body>\n</html>\n");
    html
}
