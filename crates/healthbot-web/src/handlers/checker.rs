//! Symptom checker page — free-text symptoms + severity → rendered advice.

use axum::{extract::State, response::Html, Form};
use healthbot_core::{AnalysisResult, Severity};
use serde::Deserialize;

use crate::state::SharedState;

pub const SEVERE_ADVISORY: &str =
    "Your symptoms are severe. Please consult a doctor immediately.";

#[derive(Deserialize)]
pub struct CheckerForm {
    pub symptoms_text: String,
    pub severity: Severity,
}

enum PageBody<'a> {
    Blank,
    Error(&'a str),
    Results {
        query: &'a str,
        severity: Severity,
        result: AnalysisResult,
    },
}

pub async fn checker_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_checker_page(PageBody::Blank))
}

pub async fn checker_submit(
    State(state): State<SharedState>,
    Form(form): Form<CheckerForm>,
) -> Html<String> {
    let text = form.symptoms_text.trim();

    // Blank input is rejected at the boundary; the matcher is never invoked.
    if text.is_empty() {
        return Html(render_checker_page(PageBody::Error(
            "Please enter some symptoms.",
        )));
    }

    let result = state.db.analyze(text);

    Html(render_checker_page(PageBody::Results {
        query: text,
        severity: form.severity,
        result,
    }))
}

fn render_checker_page(body: PageBody<'_>) -> String {
    let body_html = match body {
        PageBody::Blank => String::new(),
        PageBody::Error(message) => format!(
            r#"<div class="alert alert-danger mt-4">{}</div>"#,
            message
        ),
        PageBody::Results { query, severity, result } => {
            let advisory_html = if severity.is_severe() {
                format!(r#"<div class="alert alert-warning mt-4">⚠️ {}</div>"#, SEVERE_ADVISORY)
            } else {
                String::new()
            };

            let results_html = if result.is_empty() {
                format!(
                    r#"<div class="alert alert-secondary mt-4">No known symptoms matched: <em>{}</em>. Try describing them differently.</div>"#,
                    query
                )
            } else {
                format!(
                    r#"
            <div class="card mt-4">
                <div class="card-header">
                    <h5 class="mb-0">✅ Analysis complete for: <em class="text-primary">{}</em>
                        <span class="badge bg-secondary ms-2">{}</span>
                    </h5>
                </div>
                <div class="card-body">
                    <div class="row">
                        <div class="col">{}</div>
                        <div class="col">{}</div>
                        <div class="col">{}</div>
                    </div>
                </div>
            </div>"#,
                    query,
                    severity.label(),
                    render_section("🛡️ Precautions", &result.precautions),
                    render_section("💊 Medicines", &result.medicines),
                    render_section("💡 Tips", &result.tips),
                )
            };

            format!("{}{}", advisory_html, results_html)
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-bs-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>HealthBot — Symptom Checker</title>
    <style>
        body {{ font-family: system-ui, sans-serif; background: #14181f; color: #e6e9ef; margin: 0; }}
        .main-content {{ max-width: 860px; margin: 0 auto; padding: 2rem 1rem; }}
        .page-title {{ margin-bottom: 0.25rem; }}
        .text-muted {{ color: #8b93a3; }}
        .text-primary {{ color: #6ea8fe; }}
        .card {{ background: #1c2230; border: 1px solid #2a3245; border-radius: 8px; }}
        .card-header {{ padding: 0.75rem 1rem; border-bottom: 1px solid #2a3245; }}
        .card-body {{ padding: 1rem; }}
        .row {{ display: flex; gap: 1rem; }}
        .col {{ flex: 1; }}
        .alert {{ padding: 0.75rem 1rem; border-radius: 8px; }}
        .alert-warning {{ background: #4a3b12; color: #ffd97a; }}
        .alert-danger {{ background: #4a1c24; color: #ff8b98; }}
        .alert-secondary {{ background: #242b3a; color: #aeb6c6; }}
        .badge {{ padding: 0.2rem 0.5rem; border-radius: 6px; font-size: 0.8rem; background: #2a3245; }}
        .mt-4 {{ margin-top: 1.5rem; }}
        .form-label {{ display: block; font-weight: 700; margin: 1rem 0 0.4rem; }}
        textarea, select {{ width: 100%; background: #11151d; color: #e6e9ef; border: 1px solid #2a3245; border-radius: 6px; padding: 0.5rem; }}
        button {{ margin-top: 1rem; padding: 0.6rem 1.4rem; border: none; border-radius: 6px; background: #2f6fed; color: #fff; font-size: 1rem; cursor: pointer; }}
        ul {{ padding-left: 1.2rem; }}
    </style>
</head>
<body>
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">🩺 HealthBot — Symptom Checker</h1>
        <p class="text-muted">Describe your symptoms in plain text (e.g. "I have fever and cough")</p>
    </div>

    <div class="card">
        <div class="card-body">
            <form method="POST" action="/">
                <label class="form-label">Symptoms</label>
                <textarea name="symptoms_text" rows="3"
                    placeholder="e.g. I have fever and cough"></textarea>

                <label class="form-label">Severity</label>
                <select name="severity">
                    <option value="mild" selected>Mild</option>
                    <option value="moderate">Moderate</option>
                    <option value="severe">Severe</option>
                </select>

                <button type="submit">🔬 Analyze</button>
            </form>
        </div>
    </div>

    {}
</main>
</body>
</html>"#,
        body_html
    )
}

fn render_section(title: &str, items: &std::collections::BTreeSet<String>) -> String {
    let list = if items.is_empty() {
        r#"<p class="text-muted">Nothing matched.</p>"#.to_string()
    } else {
        // BTreeSet iterates lexicographically, so output order is stable.
        let rows: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", item))
            .collect();
        format!("<ul>{}</ul>", rows)
    };
    format!("<h3>{}</h3>{}", title, list)
}
