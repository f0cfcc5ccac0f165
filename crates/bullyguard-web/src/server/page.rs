//! Server-rendered classify page

use axum::response::Html;
use bullyguard_core::Label;

/// Render the classify page with an optional result or error block
pub fn render(label: Option<Label>, score: Option<f64>, error: Option<&str>) -> Html<String> {
    let mut result = String::new();

    if let Some(error) = error {
        result.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    if let Some(label) = label {
        let class = match label {
            Label::Bullying => "flagged",
            Label::NonBullying => "clear",
        };
        result.push_str(&format!(
            "<p class=\"label {}\">{}</p>\n",
            class, label
        ));
        if let Some(score) = score {
            result.push_str(&format!(
                "<p class=\"score\">Confidence: {:.2}</p>\n",
                score
            ));
        }
    }

    Html(PAGE_HTML.replace("<!-- RESULT -->", &result))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>BullyGuard</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #111827; color: #f9fafb; margin: 0; }
        .container { max-width: 640px; margin: 0 auto; padding: 3rem 1rem; }
        h1 { color: #60a5fa; }
        textarea { width: 100%; min-height: 8rem; border-radius: 0.5rem; border: 1px solid #374151;
                   background: #1f2937; color: #f9fafb; padding: 0.75rem; font-size: 1rem; }
        button { margin-top: 0.75rem; padding: 0.5rem 1.5rem; border: none; border-radius: 0.5rem;
                 background: #2563eb; color: white; font-size: 1rem; cursor: pointer; }
        button:hover { background: #1d4ed8; }
        .error { color: #f87171; }
        .label { font-size: 1.5rem; font-weight: bold; }
        .label.flagged { color: #f87171; }
        .label.clear { color: #34d399; }
        .score { color: #9ca3af; }
    </style>
</head>
<body>
    <div class="container">
        <h1>BullyGuard</h1>
        <p>Paste a message below to check it for cyberbullying.</p>
        <form method="post" action="/">
            <textarea name="text" placeholder="Enter some text to classify..."></textarea>
            <br>
            <button type="submit">Classify</button>
        </form>
        <div id="result">
<!-- RESULT -->
        </div>
    </div>
</body>
</html>
"#;
