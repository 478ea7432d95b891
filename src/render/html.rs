use crate::model::SankeyData;

/// Plotly bundle referenced by the page; the only network fetch a viewer makes.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render a self-contained HTML page with the Sankey data embedded as JSON.
///
/// Important: we avoid `format!()` because the page contains `{}` from JS
/// object literals, which would conflict with Rust formatting.
pub fn render_sankey_html(data: &SankeyData) -> anyhow::Result<String> {
    // `</` inside a string would end the script element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="__PLOTLY__" charset="utf-8"></script>
<style>
  html, body { height: 100%; margin: 0; font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; }
  #sankey { width: 100%; height: 100%; }
</style>
</head>
<body>
<div id="sankey"></div>
<script>
// Embedded diagram data (JSON object literal)
const DATA = __DATA__;

const trace = {
  type: "sankey",
  arrangement: "snap",
  node: {
    pad: 15,
    thickness: 18,
    line: { color: "black", width: 0.3 },
    label: DATA.nodes.label,
    color: DATA.nodes.color
  },
  link: {
    source: DATA.links.source,
    target: DATA.links.target,
    value: DATA.links.value,
    color: DATA.links.color,
    customdata: DATA.links.customdata,
    hovertemplate: "%{customdata}<extra></extra>"
  }
};

const layout = {
  title: { text: DATA.title },
  font: { size: 12 },
  hoverlabel: { align: "left" },
  margin: { l: 10, r: 10, t: 60, b: 10 }
};

Plotly.newPlot("sankey", [trace], layout, { responsive: true });
</script>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__TITLE__", &page_title(&data.title))
        .replace("__PLOTLY__", PLOTLY_CDN)
        .replace("__DATA__", &json))
}

/// Plain-text `<title>`: the first line of the diagram title, escaped.
fn page_title(title: &str) -> String {
    let first_line = title.split("<br>").next().unwrap_or(title);
    first_line
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
