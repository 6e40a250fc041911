use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::Result;

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

pub fn render_text(report: &Report) -> String {
    match report {
        Report::Found {
            indices,
            first_value,
            second_value,
            target,
        } => format!(
            "Indices: [{}, {}] (values: {} + {} = {})",
            indices.first, indices.second, first_value, second_value, target
        ),
        Report::NotFound { .. } => "No two numbers sum to the target.".to_string(),
        Report::InvalidInput { message, .. } => format!("Error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{IndexPair, InputKind};

    #[test]
    fn test_render_found_text() {
        let report = Report::Found {
            indices: IndexPair { first: 0, second: 1 },
            first_value: 2,
            second_value: 7,
            target: 9,
        };
        assert_eq!(
            render(&report, OutputFormat::Text).unwrap(),
            "Indices: [0, 1] (values: 2 + 7 = 9)"
        );
    }

    #[test]
    fn test_render_json_is_tagged() {
        let report = Report::NotFound { target: 100 };
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["target"], 100);

        let report = Report::InvalidInput {
            kind: InputKind::Target,
            message: "the target must be an integer.".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], "invalid_input");
        assert_eq!(json["kind"], "target");
    }

    #[test]
    fn test_render_found_json_is_flat() {
        let report = Report::Found {
            indices: IndexPair { first: 1, second: 2 },
            first_value: 2,
            second_value: 4,
            target: 6,
        };
        assert_eq!(
            render(&report, OutputFormat::Json).unwrap(),
            r#"{"status":"found","first":1,"second":2,"first_value":2,"second_value":4,"target":6}"#
        );
    }
}
