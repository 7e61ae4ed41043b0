// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Report rendering for table and JSON output

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use serde_json::{Map, Value as JsonValue};

use super::commands::OutputFormat;

/// Named list of properties shown by a command
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: String,
    fields: Vec<(String, JsonValue)>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Property").fg(Color::Cyan).set_alignment(CellAlignment::Center),
            Cell::new("Value").fg(Color::Cyan).set_alignment(CellAlignment::Center),
        ]);

        for (name, value) in &self.fields {
            table.add_row(vec![Cell::new(name), format_cell_value(value)]);
        }

        format!("{}\n{}", self.title.bold().green(), table)
    }

    fn render_json(&self) -> Result<String, serde_json::Error> {
        let object: Map<String, JsonValue> = self.fields.iter().cloned().collect();
        serde_json::to_string_pretty(&JsonValue::Object(object))
    }
}

fn format_cell_value(value: &JsonValue) -> Cell {
    match value {
        JsonValue::Null => Cell::new("NULL").fg(Color::Grey),
        JsonValue::Bool(flag) => Cell::new(flag).fg(Color::Yellow),
        JsonValue::Number(number) => Cell::new(number).fg(Color::Green).set_alignment(CellAlignment::Right),
        JsonValue::String(text) => Cell::new(text),
        other => Cell::new(other.to_string()),
    }
}
