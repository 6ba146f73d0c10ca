use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// One entry of a user-defined correspondence between a form component id
/// and a spreadsheet column header.
#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
pub struct FieldMapping {
    #[validate(length(min = 1))]
    pub field_id: String,
    #[validate(length(min = 1))]
    pub column: String,
}

pub fn mapped_columns(mapping: &[FieldMapping]) -> Vec<String> {
    mapping.iter().map(|entry| entry.column.clone()).collect()
}

/// Turns a submission record into one spreadsheet row. The mapping order
/// defines the column order; fields missing from the record become empty
/// cells so the row stays aligned with the header.
pub fn mapped_row(mapping: &[FieldMapping], record: &Map<String, Value>) -> Vec<String> {
    mapping
        .iter()
        .map(|entry| match record.get(&entry.field_id) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping() -> Vec<FieldMapping> {
        vec![
            FieldMapping {
                field_id: String::from("field_name"),
                column: String::from("Name"),
            },
            FieldMapping {
                field_id: String::from("field_age"),
                column: String::from("Age"),
            },
            FieldMapping {
                field_id: String::from("field_city"),
                column: String::from("City"),
            },
        ]
    }

    #[test]
    fn row_follows_mapping_order() {
        let record = json!({
            "field_age": 31,
            "field_name": "Ada",
            "field_city": "London",
        });

        let row = mapped_row(&mapping(), record.as_object().unwrap());

        assert_eq!(row, vec!["Ada", "31", "London"]);
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let record = json!({ "field_name": "Ada" });

        let row = mapped_row(&mapping(), record.as_object().unwrap());

        assert_eq!(row, vec!["Ada", "", ""]);
    }

    #[test]
    fn null_values_become_empty_cells() {
        let record = json!({
            "field_name": null,
            "field_age": false,
            "field_city": ["a", "b"],
        });

        let row = mapped_row(&mapping(), record.as_object().unwrap());

        assert_eq!(row, vec!["", "false", "[\"a\",\"b\"]"]);
    }

    #[test]
    fn columns_follow_mapping_order() {
        assert_eq!(mapped_columns(&mapping()), vec!["Name", "Age", "City"]);
    }
}
