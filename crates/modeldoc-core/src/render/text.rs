//! Markdown and CSV rendering
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::{Document, Template};
use crate::descriptor::{ControllerDescriptor, ModelDescriptor};

/// Line-oriented text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    Markdown,
    Csv,
}

impl Document for ModelDescriptor {
    fn write_text(&self, format: TextFormat, out: &mut String) {
        out.push_str(&Template::model_header(&self.model_name, format));
        for property in &self.properties {
            out.push_str(&Template::property_row(property, format));
        }
    }
}

impl Document for ControllerDescriptor {
    fn write_text(&self, format: TextFormat, out: &mut String) {
        out.push_str(&Template::controller_header(&self.controller_name, format));
        for method in &self.methods {
            out.push_str(&Template::method(method, format));
            if method.parameters.is_empty() {
                out.push_str(&Template::no_parameters(format));
            } else {
                out.push_str(&Template::parameters_header(format));
                for parameter in &method.parameters {
                    out.push_str(&Template::parameter_row(parameter, format));
                }
            }
            out.push('\n');
        }
    }
}

/// One document block without trailing whitespace
pub fn render<D: Document + ?Sized>(document: &D, format: TextFormat) -> String {
    let mut out = String::new();
    document.write_text(format, &mut out);
    out.truncate(out.trim_end().len());
    out
}

/// Document blocks separated by one blank line
pub fn render_batch<D: Document>(documents: &[D], format: TextFormat) -> String {
    documents
        .iter()
        .map(|document| render(document, format))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MethodDescriptor, ParameterDescriptor, PropertyDescriptor};
    use pretty_assertions::assert_eq;

    fn person() -> ModelDescriptor {
        ModelDescriptor {
            model_name: "Person".into(),
            properties: vec![
                PropertyDescriptor {
                    name: "Name".into(),
                    type_label: "String".into(),
                    description: "-".into(),
                    attributes_summary: "-".into(),
                    default_value: "\"Bob\"".into(),
                },
                PropertyDescriptor {
                    name: "IsActive".into(),
                    type_label: "bool".into(),
                    description: "-".into(),
                    attributes_summary: "-".into(),
                    default_value: "true".into(),
                },
            ],
        }
    }

    fn users() -> ControllerDescriptor {
        ControllerDescriptor {
            controller_name: "UsersController".into(),
            route_prefix: String::new(),
            methods: vec![
                MethodDescriptor {
                    method_name: "Get".into(),
                    http_verb: "HTTPGET".into(),
                    route: "/Users/Get".into(),
                    description: "Fetch a user.".into(),
                    parameters: vec![ParameterDescriptor {
                        name: "id".into(),
                        type_label: "i32".into(),
                        required: true,
                    }],
                },
                MethodDescriptor {
                    method_name: "Index".into(),
                    http_verb: "UNKNOWN".into(),
                    route: "/Users/".into(),
                    description: "-".into(),
                    parameters: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_model_markdown() {
        let expected = "# Person Model\n\
            \n\
            | Property | Type | Description | Attributes | Value |\n\
            |----------|------|-------------|------------|-------|\n\
            | Name | String | - | - | \"Bob\" |\n\
            | IsActive | bool | - | - | true |";
        assert_eq!(render(&person(), TextFormat::Markdown), expected);
    }

    #[test]
    fn test_model_csv() {
        let expected = "Person Model\n\
            Property,Type,Description,Attributes,Value\n\
            Name,String,-,-,\"Bob\"\n\
            IsActive,bool,-,-,true";
        assert_eq!(render(&person(), TextFormat::Csv), expected);
    }

    #[test]
    fn test_controller_markdown() {
        let expected = "# UsersController Controller\n\
            ## Get\n\
            - **HTTP Method:** HTTPGET\n\
            - **Route:** `/Users/Get`\n\
            - **Description:** Fetch a user.\n\
            - **Parameters:**\n\
            | Name | Type | Required |\n\
            |------|------|----------|\n\
            | id | i32 | Yes |\n\
            \n\
            ## Index\n\
            - **HTTP Method:** UNKNOWN\n\
            - **Route:** `/Users/`\n\
            - **Description:** -\n\
            - **Parameters:**\n\
            \x20 - No parameters.";
        assert_eq!(render(&users(), TextFormat::Markdown), expected);
    }

    #[test]
    fn test_controller_csv() {
        let expected = "UsersController Controller\n\
            Get,HTTP Method,HTTPGET,Route,`/Users/Get`,Description,Fetch a user.,Parameters,\n\
            Name,Type,Required\n\
            id,i32,Yes\n\
            \n\
            Index,HTTP Method,UNKNOWN,Route,`/Users/`,Description,-,Parameters,\n\
            -";
        assert_eq!(render(&users(), TextFormat::Csv), expected);
    }

    #[test]
    fn test_batch_separates_blocks_with_blank_line() {
        let empty = ModelDescriptor {
            model_name: "Empty".into(),
            properties: vec![],
        };
        let batch = render_batch(&[person(), empty], TextFormat::Csv);
        assert!(batch.contains("IsActive,bool,-,-,true\n\nEmpty Model\n"));
        assert!(batch.ends_with("Property,Type,Description,Attributes,Value"));
    }

    #[test]
    fn test_empty_batch_is_empty() {
        let none: Vec<ModelDescriptor> = vec![];
        assert_eq!(render_batch(&none, TextFormat::Markdown), "");
    }
}
