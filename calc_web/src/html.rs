//! Page rendering
//!
//! Plain string templates. Report blocks come from calc_core as text and
//! are embedded, escaped, inside `<pre>`.

use calc_core::materials::{MaterialCatalog, DEFAULT_MATERIAL};
use calc_core::report::fmt_currency;
use calc_core::request::EstimateReport;

const STYLE: &str = "body{font-family:sans-serif;max-width:760px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin:.6rem 0 .2rem}\
textarea{width:100%;min-height:8rem}\
pre{background:#f4f4f4;padding:1rem;white-space:pre-wrap}\
fieldset{margin:1rem 0}";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// Input form. Material options come from `catalog`, `aterro` preselected.
pub fn render_index(catalog: &MaterialCatalog) -> String {
    let options: String = catalog
        .iter()
        .map(|m| {
            let selected = if m.name == DEFAULT_MATERIAL { " selected" } else { "" };
            format!(
                "<option value=\"{name}\"{selected}>{name} ({cost}/m³)</option>\n",
                name = escape_html(&m.name),
                selected = selected,
                cost = escape_html(&fmt_currency(m.cost_per_m3)),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Estimador de terreno</h1>
<form method="post" action="/report">
<fieldset>
<legend>Terreno</legend>
<label for="largura">Largura (m)</label>
<input id="largura" name="largura" inputmode="decimal">
<label for="comprimento">Comprimento (m)</label>
<input id="comprimento" name="comprimento" inputmode="decimal">
</fieldset>
<fieldset>
<legend>Cômodos</legend>
<label for="comodos_text">Um por linha: nome larguraxcomprimento (ex: quarto 3x4)</label>
<textarea id="comodos_text" name="comodos_text"></textarea>
</fieldset>
<fieldset>
<legend><label><input type="checkbox" name="do_terraplenagem"> Estimar terraplenagem</label></legend>
<label for="profundidade">Profundidade média (m)</label>
<input id="profundidade" name="profundidade" inputmode="decimal">
<label for="material">Material</label>
<select id="material" name="material">
{options}</select>
<label for="custo_mao_obra">Custo de mão-de-obra (R$/m³)</label>
<input id="custo_mao_obra" name="custo_mao_obra" inputmode="decimal">
<label for="contingencia">Contingência (%)</label>
<input id="contingencia" name="contingencia" inputmode="decimal">
</fieldset>
<button type="submit">Gerar relatório</button>
</form>"#,
        options = options
    );

    page("Estimador de terreno", &body)
}

/// Report page with the plot, rooms and (optional) earthwork blocks.
pub fn render_report(report: &EstimateReport) -> String {
    let mut body = String::from("<h1>Relatório</h1>\n");
    body.push_str(&format!("<pre id=\"terreno\">{}</pre>\n", escape_html(&report.plot)));
    body.push_str(&format!("<pre id=\"comodos\">{}</pre>\n", escape_html(&report.rooms)));
    if let Some(earthwork) = &report.earthwork {
        body.push_str(&format!(
            "<pre id=\"terraplenagem\">{}</pre>\n",
            escape_html(earthwork)
        ));
    }
    body.push_str("<p><a href=\"/\">Novo cálculo</a></p>");

    page("Relatório", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{Plot, Room};
    use calc_core::materials::DEFAULT_CATALOG;
    use calc_core::request::EstimateRequest;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
        assert_eq!(escape_html("Área: 9.0 m²"), "Área: 9.0 m²");
    }

    #[test]
    fn test_index_lists_materials() {
        let html = render_index(&DEFAULT_CATALOG);
        assert!(html.contains("<option value=\"aterro\" selected>aterro (R$ 80.00/m³)</option>"));
        assert!(html.contains("<option value=\"brita\">"));
        assert!(html.contains("<option value=\"areia\">"));
        assert!(html.contains("name=\"comodos_text\""));
        assert!(html.contains("name=\"do_terraplenagem\""));
    }

    #[test]
    fn test_report_without_earthwork() {
        let report = EstimateRequest::new(Plot::new(20.0, 30.0)).run();
        let html = render_report(&report);
        assert!(html.contains("<pre id=\"terreno\">"));
        assert!(html.contains("Nenhum cômodo informado."));
        assert!(!html.contains("id=\"terraplenagem\""));
    }

    #[test]
    fn test_report_escapes_room_names() {
        let report = EstimateRequest::new(Plot::new(1.0, 1.0))
            .with_rooms(vec![Room::new("<script>", 1.0, 1.0)])
            .run();
        let html = render_report(&report);
        assert!(html.contains("&lt;script&gt;: 1.0 m x 1.0 m"));
        assert!(!html.contains("<script>"));
    }
}
