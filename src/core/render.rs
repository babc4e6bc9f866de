use crate::core::FormattedResult;
use crate::utils::error::{PlayWheError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = PlayWheError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(PlayWheError::InvalidConfigValueError {
                field: "format".to_string(),
                value: value.to_string(),
                reason: "Supported formats: text, json, csv".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn render(results: &[FormattedResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => render_csv(results),
    }
}

fn render_text(results: &[FormattedResult]) -> String {
    let date_width = results.iter().map(|r| r.date.len()).max().unwrap_or(0);
    let time_width = results.iter().map(|r| r.time.len()).max().unwrap_or(0);

    results
        .iter()
        .map(|r| {
            format!(
                "{:<dw$}  {:<tw$}  #{} {}",
                r.date,
                r.time,
                r.mark,
                r.spirit,
                dw = date_width,
                tw = time_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(results: &[FormattedResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["draw", "date", "time", "mark", "spirit"])?;
    for r in results {
        let draw = r.draw.map(|d| d.to_string()).unwrap_or_default();
        let mark = r.mark.to_string();
        writer.write_record([
            draw.as_str(),
            r.date.as_str(),
            r.time.as_str(),
            mark.as_str(),
            r.spirit.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlayWheError::RenderError {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| PlayWheError::RenderError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FormattedResult> {
        vec![
            FormattedResult {
                draw: Some(15012),
                date: "Jan 5, 2024".to_string(),
                time: "Morning".to_string(),
                mark: 1,
                spirit: "centipede".to_string(),
            },
            FormattedResult {
                draw: None,
                date: "Jan 15, 2024".to_string(),
                time: "Afternoon".to_string(),
                mark: 36,
                spirit: "donkey".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_columns_are_aligned() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jan 5, 2024   Morning    #1 centipede");
        assert_eq!(lines[1], "Jan 15, 2024  Afternoon  #36 donkey");
    }

    #[test]
    fn test_csv_has_header_and_quotes_dates() {
        let csv = render(&sample(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "draw,date,time,mark,spirit");
        assert_eq!(lines[1], "15012,\"Jan 5, 2024\",Morning,1,centipede");
        assert_eq!(lines[2], ",\"Jan 15, 2024\",Afternoon,36,donkey");
    }

    #[test]
    fn test_json_is_an_array_of_objects() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["spirit"], "donkey");
        assert!(value[1]["draw"].is_null());
    }

    #[test]
    fn test_empty_text_render() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
