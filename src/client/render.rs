use crate::models::domain::PhysicsResult;

/// The only boundary between generated script and the host page.
pub const IFRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-forms allow-popups allow-presentation";

pub const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Lets wide canvases scroll instead of overflowing on small screens.
pub const RESPONSIVE_HEAD: &str = r#"<head>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      body {
        margin: 0;
        padding: 8px;
        overflow-x: auto !important;
        overflow-y: auto !important;
        min-width: 100%;
      }
      canvas, svg {
        min-width: 600px !important;
        height: auto !important;
        display: block;
      }
      .controls, .physics-data {
        font-size: 12px !important;
        padding: 8px !important;
        margin: 4px 0 !important;
        min-width: 280px;
      }
      .physics-data {
        position: relative !important;
        bottom: auto !important;
        background: rgba(0,0,0,0.8) !important;
        color: white !important;
        border-radius: 8px !important;
        max-height: 120px !important;
        overflow-y: auto !important;
        overflow-x: auto !important;
      }
      @media (max-width: 480px) {
        body { padding: 4px; }
        canvas, svg { min-width: 480px !important; }
        .controls, .physics-data {
          font-size: 10px !important;
          padding: 4px !important;
          margin: 2px 0 !important;
          min-width: 240px;
        }
      }
    </style>"#;

/// Document handed to the iframe: the generated page with the responsive
/// styles inserted after its first `<head>`. Pages without one pass through.
pub fn frame_document(code: &str) -> String {
    code.replacen("<head>", RESPONSIVE_HEAD, 1)
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn iframe_markup(code: &str) -> String {
    format!(
        r#"<iframe srcdoc="{}" title="Physics Animation Preview" sandbox="{}" allow="{}" style="width: 100%; min-height: 400px; border: 1px solid #ddd; border-radius: 8px;"></iframe>"#,
        escape_html(&frame_document(code)),
        IFRAME_SANDBOX,
        IFRAME_ALLOW,
    )
}

/// Standalone page showing the explanation next to the sandboxed animation.
pub fn preview_page(question: &str, result: &PhysicsResult) -> String {
    let concepts = result
        .concepts
        .iter()
        .map(|c| format!("<li>{}</li>", escape_html(c)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: Arial, sans-serif; max-width: 1200px; margin: 0 auto; padding: 24px; }}
  section {{ margin-bottom: 24px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<section>{frame}</section>
<section><h2>Analysis</h2><p>{analysis}</p></section>
<section><h2>Solution</h2><p>{solution}</p></section>
<section><h2>Concepts</h2><ul>{concepts}</ul></section>
</body>
</html>
"#,
        title = escape_html(question),
        frame = iframe_markup(&result.code),
        analysis = escape_html(&result.analysis),
        solution = escape_html(&result.solution),
        concepts = concepts,
    )
}

/// Load state of the preview frame. Only document-level failures are
/// observable; script errors inside the generated page are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStatus {
    #[default]
    Loading,
    Loaded,
    Error,
}

impl FrameStatus {
    pub fn on_load(self) -> Self {
        match self {
            FrameStatus::Loading => FrameStatus::Loaded,
            other => other,
        }
    }

    pub fn on_error(self) -> Self {
        FrameStatus::Error
    }
}
