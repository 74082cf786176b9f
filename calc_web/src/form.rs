//! Report form fields
//!
//! Field names follow the HTML form. Every field is optional: missing,
//! blank or unparseable numbers count as zero and room lines that fail to
//! parse are dropped. A repeated field keeps its first value.

use calc_core::calculations::Plot;
use calc_core::materials::DEFAULT_MATERIAL;
use calc_core::parsing::{lenient_number, parse_room_block};
use calc_core::request::{EarthworkOptions, EstimateRequest};

/// Value an HTML checkbox submits when ticked
const CHECKBOX_ON: &str = "on";

/// `POST /report` body (application/x-www-form-urlencoded)
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    /// Plot width (m)
    pub largura: Option<String>,
    /// Plot length (m)
    pub comprimento: Option<String>,
    /// One room per line: `nome dimensões`
    pub comodos_text: Option<String>,
    /// Earthwork checkbox
    pub do_terraplenagem: Option<String>,
    /// Average depth (m)
    pub profundidade: Option<String>,
    pub material: Option<String>,
    /// Labor cost (R$/m³)
    pub custo_mao_obra: Option<String>,
    /// Contingency (%)
    pub contingencia: Option<String>,
}

impl ReportForm {
    /// Collect the decoded `key=value` pairs of a form body. Unknown keys are
    /// ignored and only the first occurrence of a key counts.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "largura" => &mut form.largura,
                "comprimento" => &mut form.comprimento,
                "comodos_text" => &mut form.comodos_text,
                "do_terraplenagem" => &mut form.do_terraplenagem,
                "profundidade" => &mut form.profundidade,
                "material" => &mut form.material,
                "custo_mao_obra" => &mut form.custo_mao_obra,
                "contingencia" => &mut form.contingencia,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    pub fn earthwork_requested(&self) -> bool {
        self.do_terraplenagem.as_deref() == Some(CHECKBOX_ON)
    }

    /// Build the estimate request with the form's leniency rules.
    pub fn to_request(&self) -> EstimateRequest {
        let plot = Plot::new(
            lenient_number(self.largura.as_deref()),
            lenient_number(self.comprimento.as_deref()),
        );
        let rooms = parse_room_block(self.comodos_text.as_deref().unwrap_or_default());
        let request = EstimateRequest::new(plot).with_rooms(rooms);

        if !self.earthwork_requested() {
            return request;
        }

        let material = self
            .material
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MATERIAL);

        request.with_earthwork(EarthworkOptions::new(
            lenient_number(self.profundidade.as_deref()),
            material,
            lenient_number(self.custo_mao_obra.as_deref()),
            lenient_number(self.contingencia.as_deref()),
        ))
    }
}
