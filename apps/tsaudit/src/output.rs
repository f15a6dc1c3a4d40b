//! Report rendering for analysis results.
//!
//! Pure composers over `&[AnalysisResult]` for text, JSON, HTML, and
//! Markdown, plus a printer that selects by output mode. Composers carry no
//! analysis logic; they only format an already-computed report.

use crate::models::AnalysisResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output == "text" && std::env::var_os("NO_COLOR").is_none()
}

/// Render results in the requested output mode. `color` only affects the
/// text mode.
pub fn render(results: &[AnalysisResult], output: &str, color: bool) -> String {
    match output {
        "json" => serde_json::to_string_pretty(&compose_json(results)).unwrap_or_default(),
        "html" => compose_html(results),
        "markdown" => compose_markdown(results),
        _ => compose_text(results, color),
    }
}

/// Print the report to stdout, honoring `NO_COLOR`.
pub fn print_report(results: &[AnalysisResult], output: &str) {
    println!("{}", render(results, output, use_colors(output)));
}

/// Compose the JSON report (pure) for printing and snapshot tests.
pub fn compose_json(results: &[AnalysisResult]) -> JsonVal {
    serde_json::to_value(results).unwrap_or(JsonVal::Null)
}

fn verdict(valid: bool, color: bool) -> String {
    match (valid, color) {
        (true, true) => "valid".green().bold().to_string(),
        (true, false) => "valid".to_string(),
        (false, true) => "invalid".red().bold().to_string(),
        (false, false) => "invalid".to_string(),
    }
}

/// Compose the line-oriented human report.
pub fn compose_text(results: &[AnalysisResult], color: bool) -> String {
    let mut out = String::new();
    for r in results {
        let header = if color {
            format!("❲{}❳ {}", r.config_path.bold(), verdict(r.valid, color))
        } else {
            format!("❲{}❳ {}", r.config_path, verdict(r.valid, color))
        };
        out.push_str(&header);
        out.push('\n');
        for m in &r.messages {
            let icon = if color {
                "◆".blue().to_string()
            } else {
                "◆".to_string()
            };
            out.push_str(&format!("  {} {}\n", icon, m));
        }
        for s in &r.suggestions {
            let icon = if color {
                "▲".yellow().to_string()
            } else {
                "▲".to_string()
            };
            out.push_str(&format!("  {} {} — {}\n", icon, s.description, s.rationale));
        }
    }
    let summary = format!(
        "— Summary — configs={} valid={} suggestions={}",
        results.len(),
        results.iter().filter(|r| r.valid).count(),
        results.iter().map(|r| r.suggestions.len()).sum::<usize>()
    );
    if color {
        out.push_str(&summary.bold().to_string());
    } else {
        out.push_str(&summary);
    }
    out.push('\n');
    out
}

/// Compose the Markdown report.
pub fn compose_markdown(results: &[AnalysisResult]) -> String {
    let mut out = String::from("# Configuration analysis\n");
    for r in results {
        out.push_str(&format!(
            "\n## `{}` — {}\n",
            r.config_path,
            if r.valid { "valid" } else { "invalid" }
        ));
        if !r.messages.is_empty() {
            out.push_str("\nMessages:\n\n");
            for m in &r.messages {
                out.push_str(&format!("- {}\n", m));
            }
        }
        if !r.suggestions.is_empty() {
            out.push_str("\nSuggestions:\n\n");
            for s in &r.suggestions {
                out.push_str(&format!("- **{}** — {}\n", s.description, s.rationale));
            }
        }
    }
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compose the HTML report.
pub fn compose_html(results: &[AnalysisResult]) -> String {
    let mut body = String::new();
    for r in results {
        body.push_str(&format!(
            "<section><h2>{} <em>{}</em></h2>\n",
            escape_html(&r.config_path),
            if r.valid { "valid" } else { "invalid" }
        ));
        if !r.messages.is_empty() {
            body.push_str("<ul class=\"messages\">\n");
            for m in &r.messages {
                body.push_str(&format!("<li>{}</li>\n", escape_html(m)));
            }
            body.push_str("</ul>\n");
        }
        if !r.suggestions.is_empty() {
            body.push_str("<ul class=\"suggestions\">\n");
            for s in &r.suggestions {
                body.push_str(&format!(
                    "<li><strong>{}</strong> — {}</li>\n",
                    escape_html(&s.description),
                    escape_html(&s.rationale)
                ));
            }
            body.push_str("</ul>\n");
        }
        body.push_str("</section>\n");
    }
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\">\
<title>Configuration analysis</title></head>\n<body>\n<h1>Configuration analysis</h1>\n{}</body></html>\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Suggestion;

    fn sample() -> Vec<AnalysisResult> {
        vec![AnalysisResult {
            config_path: "tsconfig.json".into(),
            valid: true,
            messages: vec!["Include patterns match 2 files".into()],
            suggestions: vec![Suggestion {
                description: "Strict mode is not enabled".into(),
                rationale: "strict is the recommended baseline".into(),
            }],
            effective: None,
        }]
    }

    #[test]
    fn test_compose_json_shape() {
        let out = compose_json(&sample());
        assert_eq!(out[0]["config_path"], "tsconfig.json");
        assert_eq!(out[0]["valid"], true);
        assert_eq!(out[0]["suggestions"][0]["description"], "Strict mode is not enabled");
        assert!(out[0]["effective"].is_null());
    }

    #[test]
    fn test_text_mentions_verdict_and_summary() {
        let text = compose_text(&sample(), false);
        assert!(text.contains("❲tsconfig.json❳ valid"));
        assert!(text.contains("— Summary — configs=1 valid=1 suggestions=1"));
    }

    #[test]
    fn test_markdown_and_html_are_plain_renderers() {
        let md = compose_markdown(&sample());
        assert!(md.contains("## `tsconfig.json` — valid"));
        let html = compose_html(&sample());
        assert!(html.contains("<strong>Strict mode is not enabled</strong>"));
    }
}
