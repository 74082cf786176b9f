//! Interactive question-and-answer session.
//!
//! Generic over the reader and writer so tests can drive it with in-memory
//! buffers. End of input aborts the session with `UnexpectedEof`.

use std::io::{self, BufRead, Write};

use calc_core::calculations::{Earthwork, Plot, Room};
use calc_core::materials::{MaterialCost, DEFAULT_CATALOG, DEFAULT_MATERIAL};
use calc_core::parsing::{is_room_terminator, parse_room_line, validate_number};
use calc_core::presets::{find_preset, preset_names};
use calc_core::report::{earthwork_estimate_report, plot_report, rooms_report};
use calc_core::request::{EarthworkOptions, EstimateRequest};
use calc_core::CalcError;

use crate::config::Mode;

/// Minimum accepted plot dimension in meters
const MIN_PLOT_DIMENSION_M: f64 = 0.01;

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run the given mode, or ask for one when `mode` is `None`.
    pub fn run(&mut self, mode: Option<Mode>, json: bool) -> io::Result<()> {
        let mode = match mode {
            Some(mode) => mode,
            None => {
                writeln!(self.output, "Estimador de terreno — versão para engenheiros civis")?;
                let answer =
                    self.read_line("Executar modo demo automático (a) ou interativo (i)? [a/i]: ")?;
                Mode::from_answer(&answer)
            }
        };

        tracing::debug!(?mode, "Starting session");
        match mode {
            Mode::Demo => self.run_demo(json),
            Mode::Interactive => self.run_interactive(),
        }
    }

    /// Fixed example without any questions.
    pub fn run_demo(&mut self, json: bool) -> io::Result<()> {
        let request = EstimateRequest::new(Plot::new(20.0, 30.0))
            .with_unit_cost_m2(120.0)
            .with_earthwork(EarthworkOptions::new(0.5, "areia", 30.0, 10.0));

        let report = request.run();
        writeln!(self.output, "{}", report.plot)?;
        writeln!(self.output)?;
        if let Some(earthwork) = report.earthwork {
            writeln!(self.output, "{}", earthwork)?;
        }

        if json {
            if let Some(estimate) = request.earthwork_estimate() {
                let json = serde_json::to_string_pretty(&estimate).map_err(io::Error::other)?;
                writeln!(self.output)?;
                writeln!(self.output, "{}", json)?;
            }
        }
        Ok(())
    }

    pub fn run_interactive(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Estimador rápido para engenheiros civis — Terreno e Terraplenagem\n"
        )?;
        let width_m = self.prompt_number("Largura do terreno (m): ", Some(MIN_PLOT_DIMENSION_M))?;
        let length_m =
            self.prompt_number("Comprimento do terreno (m): ", Some(MIN_PLOT_DIMENSION_M))?;
        let plot = Plot::new(width_m, length_m);

        writeln!(self.output, "\n{}", plot_report(&plot, None))?;

        if self.ask_yes_no("\nDeseja criar a planta da casa (com cômodos)? (s/n): ")? {
            let rooms = self.choose_plan()?;
            writeln!(self.output, "\n{}", rooms_report(&rooms))?;
        }

        if self.ask_yes_no("\nDeseja estimar terraplenagem/aterro? (s/n): ")? {
            let depth_m = self.prompt_number(
                "Profundidade média / altura de aterro (m, positivo): ",
                Some(0.0),
            )?;
            let earthwork = Earthwork::new(&plot, depth_m);

            let material = self.choose_material()?;
            let labor_cost =
                self.prompt_number("Custo de mão-de-obra estimado por m³ (R$): ", Some(0.0))?;
            let contingency = self.prompt_number("Percentual de contingência (%): ", Some(0.0))?;

            let estimate = calc_core::calculations::estimate::estimate_earthwork(
                &earthwork,
                &material.name,
                material.cost_per_m3,
                labor_cost,
                contingency,
            );
            tracing::debug!(volume_m3 = estimate.volume_m3, total = estimate.total, "Earthwork estimated");
            writeln!(self.output, "\n{}", earthwork_estimate_report(&estimate))?;
        }

        Ok(())
    }

    /// Ask until the answer is a number not below `min`.
    pub fn prompt_number(&mut self, prompt: &str, min: Option<f64>) -> io::Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match validate_number(&line, min) {
                Ok(value) => return Ok(value),
                Err(e @ CalcError::BelowMinimum { .. }) => {
                    writeln!(self.output, "{}. Tente novamente.", e)?;
                }
                Err(e) if e.is_parse_error() => {
                    writeln!(self.output, "Entrada inválida. Digite um número (use '.' ou ',').")?;
                }
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    /// Read rooms until a blank line or a terminator token.
    pub fn collect_rooms(&mut self) -> io::Result<Vec<Room>> {
        writeln!(
            self.output,
            "\nInforme os cômodos um por linha no formato: nome larguraxcomprimento  (ex: quarto 3x4)"
        )?;
        writeln!(
            self.output,
            "Digite 'fim' ou 'fim dos comodos' para encerrar, ou pressione Enter em linha vazia."
        )?;

        let mut rooms = Vec::new();
        loop {
            let line = self.read_line("Cômodo: ")?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            if is_room_terminator(line) {
                writeln!(self.output, "Fim dos cômodos informado pelo usuário.")?;
                break;
            }
            if line.split_whitespace().count() == 1 {
                writeln!(self.output, "Formato inválido. Informe: nome dimensões (ex: quarto 3x4)")?;
                continue;
            }

            let room = match parse_room_line(line) {
                Ok(room) => room,
                Err(e) => {
                    writeln!(self.output, "Erro ao interpretar dimensões: {}", e)?;
                    continue;
                }
            };
            if room.validate().is_err() {
                writeln!(self.output, "Dimensões devem ser maiores que zero.")?;
                continue;
            }
            rooms.push(room);
        }

        tracing::debug!(count = rooms.len(), "Rooms collected");
        Ok(rooms)
    }

    /// Manual entry (1) or a preset plan (2). An unknown preset falls back
    /// to manual entry.
    pub fn choose_plan(&mut self) -> io::Result<Vec<Room>> {
        writeln!(self.output, "\nOpções para planta da casa:")?;
        writeln!(self.output, "  1) Criar planta do zero (entrar cômodos manualmente)")?;
        writeln!(self.output, "  2) Usar planta pronta (preset)")?;

        let choice = self.read_line("Escolha 1 ou 2 [1]: ")?;
        if choice.trim() == "2" {
            writeln!(self.output, "\nPlantas disponíveis:")?;
            for name in preset_names() {
                writeln!(self.output, " - {}", name)?;
            }
            let selected = self.read_line("Digite o nome do preset desejado: ")?;
            match find_preset(&selected) {
                Some(preset) => return Ok(preset.rooms()),
                None => {
                    writeln!(self.output, "Preset não encontrado. Voltando para criação do zero.")?;
                }
            }
        }

        self.collect_rooms()
    }

    /// Pick a material from the catalog; blank or unknown means `aterro`.
    pub fn choose_material(&mut self) -> io::Result<MaterialCost> {
        writeln!(self.output, "\nMateriais disponíveis:")?;
        for material in DEFAULT_CATALOG.iter() {
            writeln!(self.output, " - {}: R$ {:.2}/m³", material.name, material.cost_per_m3)?;
        }

        let answer = self.read_line("Escolha material (nome) [default aterro]: ")?;
        let answer = answer.trim();
        if !answer.is_empty() && !DEFAULT_CATALOG.contains(answer) {
            writeln!(self.output, "Material não encontrado. Usando preset \"{}\".", DEFAULT_MATERIAL)?;
        }
        Ok(DEFAULT_CATALOG.resolve(answer))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "sim"))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "entrada encerrada"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
