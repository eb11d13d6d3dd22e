use colored::*;
use serde_json::{json, Map, Value};
use verdict::api::{CmdMessage, CmdResult, MessageLevel, SymbolInfo};
use verdict::config::{OutputFormat, VerdictConfig, CONFIG_KEYS};
use verdict::dos::Dos;
use verdict::error::Result;
use verdict::report::ReportSummary;
use verdict::state::State;
use verdict::symbol::Vocabulary;

pub fn render(result: &CmdResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render_text(result));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&render_json(result))?);
            Ok(())
        }
    }
}

fn render_text(result: &CmdResult) -> String {
    let mut out = String::new();

    let name_width = result.symbols.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for symbol in &result.symbols {
        let name = format!("{:<width$}", symbol.name, width = name_width);
        let name = if symbol.recognized {
            name.bold()
        } else {
            name.yellow()
        };
        out.push_str(&format!("{}  {}\n", name, symbol.value.to_string().dimmed()));
    }

    let input_width = result
        .classifications
        .iter()
        .map(|c| c.input.len())
        .max()
        .unwrap_or(0);
    let code_width = result
        .classifications
        .iter()
        .map(|c| c.code.name.len())
        .max()
        .unwrap_or(0);
    for c in &result.classifications {
        out.push_str(&format!(
            "{:<iw$}  {:<cw$}  {}\n",
            c.input,
            c.code.name,
            color_state(State::resolve(c.state.name), c.state.name),
            iw = input_width,
            cw = code_width
        ));
    }

    for n in &result.normalized {
        let dos = if n.dos == Dos::FALLBACK.name() {
            n.dos.yellow()
        } else {
            n.dos.green()
        };
        out.push_str(&format!("{} -> {}\n", n.input, dos));
    }

    if let Some(report) = &result.report {
        out.push_str(&render_report_text(report));
    }

    if let Some(endpoint) = &result.endpoint {
        out.push_str(&format!("id  = {}\ndos = {}\n", endpoint.id, endpoint.dos));
    }

    if let Some(config) = &result.config {
        out.push_str(&render_config_text(config));
    }

    for message in &result.messages {
        out.push_str(&format!("{}\n", render_message(message)));
    }

    out
}

fn color_state(state: State, name: &str) -> ColoredString {
    match state {
        State::Protected => name.green(),
        State::Unprotected => name.red(),
        State::Error => name.yellow(),
        State::NotRelevant => name.blue(),
        State::None => name.dimmed(),
    }
}

fn render_report_text(report: &ReportSummary) -> String {
    let mut out = String::new();
    let width = State::members().iter().map(|s| s.name().len()).max().unwrap_or(0);
    for (state, count) in &report.counts {
        let label = format!("{:<width$}", state.name(), width = width);
        out.push_str(&format!("{}  {}\n", color_state(*state, &label), count));
    }
    out.push_str(&format!("{:<width$}  {}\n", "TOTAL", report.total(), width = width));
    if let Some(rate) = report.protection_rate() {
        out.push_str(&format!("Protected: {:.1}%\n", rate * 100.0));
    }
    out
}

fn render_config_text(config: &VerdictConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|val| format!("{} = {}\n", key, val)))
        .collect()
}

fn render_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

fn render_json(result: &CmdResult) -> Value {
    let mut out = Map::new();

    if !result.symbols.is_empty() {
        out.insert("symbols".into(), json!(result.symbols));
    }
    if !result.classifications.is_empty() {
        out.insert("classifications".into(), json!(result.classifications));
    }
    if !result.normalized.is_empty() {
        out.insert("normalized".into(), json!(result.normalized));
    }
    if let Some(report) = &result.report {
        out.insert("report".into(), report_json(report));
    }
    if let Some(endpoint) = &result.endpoint {
        out.insert("endpoint".into(), json!(endpoint));
    }
    if let Some(config) = &result.config {
        out.insert("config".into(), json!(config));
    }
    if !result.messages.is_empty() {
        let messages: Vec<Value> = result
            .messages
            .iter()
            .map(|m| {
                json!({
                    "level": format!("{:?}", m.level).to_lowercase(),
                    "content": m.content,
                })
            })
            .collect();
        out.insert("messages".into(), Value::Array(messages));
    }

    Value::Object(out)
}

fn report_json(report: &ReportSummary) -> Value {
    let results: Vec<Value> = report
        .results
        .iter()
        .map(|r| {
            json!({
                "test_id": r.test_id,
                "code": SymbolInfo::of(r.code),
                "state": r.state.name(),
            })
        })
        .collect();
    let counts: Map<String, Value> = report
        .counts
        .iter()
        .map(|(state, n)| (state.name().to_string(), json!(n)))
        .collect();

    json!({
        "total": report.total(),
        "counts": counts,
        "protection_rate": report.protection_rate(),
        "results": results,
        "rejected": report.rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict::api::{VerdictApi, VerdictPaths, VocabularyKind};

    fn plain(result: &CmdResult) -> String {
        colored::control::set_override(false);
        render_text(result)
    }

    fn api() -> VerdictApi {
        VerdictApi::new(VerdictPaths::new(std::env::temp_dir()))
    }

    #[test]
    fn text_lists_symbols_with_values() {
        let result = api().resolve(VocabularyKind::Mode, &["frozen", "autopilot"]);
        let out = plain(&result);
        assert!(out.contains("FROZEN     1"));
        assert!(out.contains("AUTOPILOT  2"));
    }

    #[test]
    fn text_classification_columns() {
        let result = api().classify(&["137", "102"]);
        let out = plain(&result);
        assert!(out.contains("137  BLOCKED    PROTECTED"));
        assert!(out.contains("102  TIMED_OUT  ERROR"));
    }

    #[test]
    fn json_report_uses_names() {
        let input = "2f1d0b8e-3c4a-4d6e-9f70-1a2b3c4d5e6f:101\n";
        let result = api().report(std::io::Cursor::new(input)).unwrap();
        let json = render_json(&result);
        assert_eq!(json["report"]["counts"]["UNPROTECTED"], 1);
        assert_eq!(json["report"]["results"][0]["state"], "UNPROTECTED");
        assert_eq!(json["report"]["results"][0]["code"]["name"], "UNPROTECTED");
        assert_eq!(json["report"]["protection_rate"], 0.0);
    }

    #[test]
    fn json_omits_empty_sections() {
        let result = api().normalize(&["linux-x86_64"]);
        let json = render_json(&result);
        assert_eq!(json["normalized"][0]["dos"], "linuxx86_64");
        assert!(json.get("symbols").is_none());
        assert!(json.get("messages").is_none());
    }
}
