//! The handful of SARIF fields we read. Everything else in the log is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SarifLog {
    pub runs: Vec<Run>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Run {
    pub tool: Option<Tool>,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Deserialize)]
pub struct Tool {
    pub driver: Driver,
}

#[derive(Debug, Deserialize)]
pub struct Driver {
    pub name: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: Option<String>,
    pub level: Option<String>,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Message {
    pub text: Option<String>,
}

impl SarifLog {
    pub fn result_count(&self) -> usize {
        self.runs.iter().map(|run| run.results.len()).sum()
    }

    /// Name of the first tool driver found, if any run declares one.
    pub fn tool_name(&self) -> Option<&str> {
        self.runs
            .iter()
            .find_map(|run| run.tool.as_ref())
            .map(|tool| tool.driver.name.as_str())
    }

    pub fn results(&self) -> impl Iterator<Item = &SarifResult> {
        self.runs.iter().flat_map(|run| run.results.iter())
    }
}

impl SarifResult {
    pub fn detail_line(&self) -> String {
        let rule = self.rule_id.as_deref().unwrap_or("<no rule>");
        let level = self.level.as_deref().unwrap_or("warning");
        let text = self
            .message
            .as_ref()
            .and_then(|m| m.text.as_deref())
            .unwrap_or_default();

        format!("{rule} [{level}]: {text}")
    }
}
