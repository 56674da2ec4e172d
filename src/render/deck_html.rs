//! Standalone deck.gl HTML page renderer
//!
//! The page loads deck.gl from a CDN and rebuilds the layer from the
//! embedded JSON. The only prop that cannot travel as JSON is the
//! elevation accessor, which the page derives from `elevationProperty`.

use log::debug;

use crate::config::PageConfig;
use crate::errors::{GeoDeckError, GeoDeckResult};
use super::layer::LayerConfig;
use super::renderer::MapRenderer;
use super::view::ViewState;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <script src="{{deck_url}}"></script>
  <style>
    html, body { margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; }
    #deck-container { position: absolute; top: 0; right: 0; bottom: 0; left: 0; }
  </style>
</head>
<body>
  <div id="deck-container"></div>
  <script>
    const LAYER = {{layer_json}};
    const VIEW_STATE = {{view_json}};
    const { type, elevationProperty, ...layerProps } = LAYER;
    const layer = new deck[type]({
      ...layerProps,
      getElevation: f => (f.properties || {})[elevationProperty],
    });
    new deck.DeckGL({
      container: 'deck-container',
      initialViewState: VIEW_STATE,
      controller: true,
      layers: [layer],
      getTooltip: ({ object }) => object && object.properties
        ? JSON.stringify(object.properties, null, 2)
        : null,
    });
  </script>
</body>
</html>
"#;

/// Renders a map as a self-contained HTML document
#[derive(Debug, Clone)]
pub struct DeckHtmlRenderer {
    title: String,
    deck_url: String,
}

impl DeckHtmlRenderer {
    pub fn new(page: &PageConfig) -> Self {
        DeckHtmlRenderer {
            title: page.title.clone(),
            deck_url: page.deck_url.clone(),
        }
    }
}

impl MapRenderer for DeckHtmlRenderer {
    fn render(&self, layer: &LayerConfig<'_>, view: &ViewState) -> GeoDeckResult<String> {
        let layer_json = script_json(layer)?;
        let view_json = script_json(view)?;
        debug!("Rendering page with {} bytes of layer data", layer_json.len());

        let title = escape_html(&self.title);
        let deck_url = escape_html(&self.deck_url);
        fill_template(PAGE_TEMPLATE, &[
            ("title", title.as_str()),
            ("deck_url", deck_url.as_str()),
            ("layer_json", layer_json.as_str()),
            ("view_json", view_json.as_str()),
        ])
    }
}

/// Serialize `value` as JSON that is safe inside a `<script>` element
///
/// `<` only occurs inside JSON strings, where `\u003c` is an equivalent
/// escape, so `</script>` in feature data cannot end the element.
fn script_json<T: serde::Serialize>(value: &T) -> GeoDeckResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Escape text for use in HTML content and double-quoted attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace `{{name}}` placeholders in a single pass
///
/// Substituted text is never rescanned. An unknown or unterminated
/// placeholder is a `RenderError`.
fn fill_template(template: &str, values: &[(&str, &str)]) -> GeoDeckResult<String> {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| {
            GeoDeckError::RenderError("Unterminated template placeholder".to_string())
        })?;
        let name = &after[..end];
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| GeoDeckError::RenderError(format!("Unknown template placeholder '{}'", name)))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
