//! Print-ready HTML document around the rendered résumé body.
//!
//! The page setup mirrors what the browser version fed its PDF converter:
//! A4 portrait with half-inch margins. Anything interpolated into the
//! template besides the rendered body is entity-escaped.

use chrono::Utc;
use html_escape::encode_text;

use crate::models::profile::ApplicantProfile;
use crate::render::markdown::markdown_to_html;

/// Renders the full exportable document for a generated résumé.
pub fn render_document(resume_markdown: &str, profile: &ApplicantProfile) -> String {
    let body = markdown_to_html(resume_markdown);
    let title = if profile.name.is_empty() {
        "Résumé".to_string()
    } else {
        format!("Résumé - {}", encode_text(&profile.name))
    };
    let generated_on = Utc::now().format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  @page {{
    size: A4 portrait;
    margin: 0.5in;
  }}
  body {{
    font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
    font-size: 11pt;
    line-height: 1.45;
    color: #1a1a2e;
    max-width: 7.5in;
    margin: 0 auto;
    padding: 24px;
  }}
  h1 {{
    font-size: 20pt;
    margin: 0 0 4px;
  }}
  h2 {{
    font-size: 13pt;
    margin: 18px 0 6px;
    padding-bottom: 2px;
    border-bottom: 1px solid #c9c9d4;
  }}
  h3 {{
    font-size: 11.5pt;
    margin: 12px 0 4px;
  }}
  ul {{
    margin: 4px 0;
    padding-left: 20px;
  }}
  li {{
    margin: 2px 0;
  }}
  p {{
    margin: 4px 0;
  }}
  table {{
    border-collapse: collapse;
    width: 100%;
  }}
  th, td {{
    border: 1px solid #c9c9d4;
    padding: 4px 8px;
    text-align: left;
  }}
  footer {{
    margin-top: 24px;
    font-size: 8pt;
    color: #8a8a99;
  }}
  @media print {{
    body {{
      padding: 0;
    }}
    footer {{
      display: none;
    }}
  }}
</style>
</head>
<body>
{body}
<footer>Generated on {generated_on}</footer>
</body>
</html>
"#
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
