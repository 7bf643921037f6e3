//! Line templates for the Markdown and CSV renderings
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::TextFormat;
use crate::descriptor::{MethodDescriptor, ParameterDescriptor, PropertyDescriptor};

/// Templates for each section of a text document.
///
/// Every template returns complete lines terminated by `\n`. CSV fields are
/// written verbatim without quoting.
pub struct Template;

impl Template {
    /// Model title and property table header
    pub fn model_header(model_name: &str, format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => format!(
                "# {} Model\n\n\
                 | Property | Type | Description | Attributes | Value |\n\
                 |----------|------|-------------|------------|-------|\n",
                model_name
            ),
            TextFormat::Csv => format!(
                "{} Model\nProperty,Type,Description,Attributes,Value\n",
                model_name
            ),
        }
    }

    /// One property row
    pub fn property_row(property: &PropertyDescriptor, format: TextFormat) -> String {
        let cells = [
            property.name.as_str(),
            property.type_label.as_str(),
            property.description.as_str(),
            property.attributes_summary.as_str(),
            property.default_value.as_str(),
        ];
        Self::row(&cells, format)
    }

    /// Controller title
    pub fn controller_header(controller_name: &str, format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => format!("# {} Controller\n", controller_name),
            TextFormat::Csv => format!("{} Controller\n", controller_name),
        }
    }

    /// Method heading with verb, route and description
    pub fn method(method: &MethodDescriptor, format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => format!(
                "## {}\n\
                 - **HTTP Method:** {}\n\
                 - **Route:** `{}`\n\
                 - **Description:** {}\n\
                 - **Parameters:**\n",
                method.method_name, method.http_verb, method.route, method.description
            ),
            TextFormat::Csv => format!(
                "{},HTTP Method,{},Route,`{}`,Description,{},Parameters,\n",
                method.method_name, method.http_verb, method.route, method.description
            ),
        }
    }

    /// Parameter table header
    pub fn parameters_header(format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => {
                "| Name | Type | Required |\n|------|------|----------|\n".to_string()
            }
            TextFormat::Csv => "Name,Type,Required\n".to_string(),
        }
    }

    /// One parameter row
    pub fn parameter_row(parameter: &ParameterDescriptor, format: TextFormat) -> String {
        let required = if parameter.required { "Yes" } else { "No" };
        let cells = [parameter.name.as_str(), parameter.type_label.as_str(), required];
        Self::row(&cells, format)
    }

    /// Marker for a method without parameters
    pub fn no_parameters(format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => "  - No parameters.\n".to_string(),
            TextFormat::Csv => "-\n".to_string(),
        }
    }

    fn row(cells: &[&str], format: TextFormat) -> String {
        match format {
            TextFormat::Markdown => format!("| {} |\n", cells.join(" | ")),
            TextFormat::Csv => format!("{}\n", cells.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_property() -> PropertyDescriptor {
        PropertyDescriptor {
            name: "Name".into(),
            type_label: "String".into(),
            description: "-".into(),
            attributes_summary: "-".into(),
            default_value: "\"Bob\"".into(),
        }
    }

    #[test]
    fn test_model_header() {
        assert_eq!(
            Template::model_header("Person", TextFormat::Markdown),
            "# Person Model\n\n| Property | Type | Description | Attributes | Value |\n|----------|------|-------------|------------|-------|\n"
        );
        assert_eq!(
            Template::model_header("Person", TextFormat::Csv),
            "Person Model\nProperty,Type,Description,Attributes,Value\n"
        );
    }

    #[test]
    fn test_controller_header_is_followed_directly_by_methods() {
        assert_eq!(
            Template::controller_header("UsersController", TextFormat::Markdown),
            "# UsersController Controller\n"
        );
        assert_eq!(
            Template::controller_header("UsersController", TextFormat::Csv),
            "UsersController Controller\n"
        );
    }

    #[test]
    fn test_property_row() {
        assert_eq!(
            Template::property_row(&name_property(), TextFormat::Markdown),
            "| Name | String | - | - | \"Bob\" |\n"
        );
        assert_eq!(
            Template::property_row(&name_property(), TextFormat::Csv),
            "Name,String,-,-,\"Bob\"\n"
        );
    }

    #[test]
    fn test_parameter_row() {
        let param = ParameterDescriptor {
            name: "id".into(),
            type_label: "i32".into(),
            required: false,
        };
        assert_eq!(Template::parameter_row(&param, TextFormat::Markdown), "| id | i32 | No |\n");
        assert_eq!(Template::parameter_row(&param, TextFormat::Csv), "id,i32,No\n");
    }

    #[test]
    fn test_method_lines() {
        let method = MethodDescriptor {
            method_name: "Get".into(),
            http_verb: "HTTPGET".into(),
            route: "/api/x/Get".into(),
            description: "-".into(),
            parameters: vec![],
        };
        assert_eq!(
            Template::method(&method, TextFormat::Csv),
            "Get,HTTP Method,HTTPGET,Route,`/api/x/Get`,Description,-,Parameters,\n"
        );
        assert!(Template::method(&method, TextFormat::Markdown)
            .contains("- **Route:** `/api/x/Get`\n"));
    }
}
