//! Declarative parameter schema.
//!
//! Describes the injector's parameters as plain data so a host
//! configuration layer can render forms or validate user input without
//! depending on the algorithm itself.

use serde::{Deserialize, Serialize};

/// Parameter value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// Positive integer.
    Integer,
    /// Positive number.
    Number,
    /// Reference to a numeric column.
    Column,
}

/// Whether a parameter is consumed or produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamRole {
    Input,
    Output,
}

/// A single parameter description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub role: ParamRole,
    pub description: &'static str,
}

const PARAMS: [ParamSpec; 4] = [
    ParamSpec {
        name: "input_item",
        kind: ParamKind::Column,
        role: ParamRole::Input,
        description: "Item to base anomaly on",
    },
    ParamSpec {
        name: "factor",
        kind: ParamKind::Integer,
        role: ParamRole::Input,
        description: "No. of extreme anomalies to be created",
    },
    ParamSpec {
        name: "size",
        kind: ParamKind::Number,
        role: ParamRole::Input,
        description: "Size of extreme anomalies to be created. e.g. 10 will \
                      create 10x size extreme anomaly compared to the normal variance",
    },
    ParamSpec {
        name: "output_item",
        kind: ParamKind::Column,
        role: ParamRole::Output,
        description: "Generated item with extreme anomalies",
    },
];

/// The injector's parameter schema.
pub fn param_schema() -> &'static [ParamSpec; 4] {
    &PARAMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_and_roles() {
        let schema = param_schema();
        let names: Vec<&str> = schema.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["input_item", "factor", "size", "output_item"]);

        let outputs: Vec<&str> = schema
            .iter()
            .filter(|p| p.role == ParamRole::Output)
            .map(|p| p.name)
            .collect();
        assert_eq!(outputs, vec!["output_item"]);
    }

    #[test]
    fn test_schema_kinds() {
        let schema = param_schema();
        assert_eq!(schema[0].kind, ParamKind::Column);
        assert_eq!(schema[1].kind, ParamKind::Integer);
        assert_eq!(schema[2].kind, ParamKind::Number);
        assert_eq!(schema[3].kind, ParamKind::Column);
    }

    #[test]
    fn test_schema_serializes() {
        let json = serde_json::to_string(param_schema()).unwrap();
        assert!(json.contains("input_item"));
        assert!(json.contains("Integer"));
        assert!(json.contains("Output"));
    }
}
