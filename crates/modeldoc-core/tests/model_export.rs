//! Integration tests for model exports


use modeldoc_core::reflect::Instance;
use modeldoc_core::{
    export_model, export_model_as_csv, export_model_as_json, export_model_as_markdown,
    export_model_as_yaml, export_models, export_type, Constructor, DocumentFormat, ExportOptions,
    Getter, PropertyInfo, PropertyValue, Reflect, TypeInfo,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use test_support::{Connection, Invoice, Person, Session};

#[test]
fn test_person_markdown() {
    let markdown = export_model_as_markdown::<Person>(&ExportOptions::new());

    let expected = "# Person Model\n\
        \n\
        | Property | Type | Description | Attributes | Value |\n\
        |----------|------|-------------|------------|-------|\n\
        | Name | String | - | - | \"Bob\" |\n\
        | IsActive | bool | - | - | true |";
    assert_eq!(markdown, expected);
}

#[test]
fn test_person_csv() {
    let csv = export_model_as_csv::<Person>(&ExportOptions::new());

    let expected = "Person Model\n\
        Property,Type,Description,Attributes,Value\n\
        Name,String,-,-,\"Bob\"\n\
        IsActive,bool,-,-,true";
    assert_eq!(csv, expected);
}

#[test]
fn test_invoice_metadata_resolution() {
    let csv = export_model_as_csv::<Invoice>(&ExportOptions::new());
    let rows: Vec<&str> = csv.lines().skip(2).collect();

    assert_eq!(
        rows,
        vec![
            "Invoice number,String,-,DisplayName(Invoice number), Required,\"\"",
            "Total,f64,Gross amount.,Documentation(Gross amount.), Description(Ignored when documented.),0",
            "Notes,Option<String>,-,StringLength(200),null",
            "Paid,bool,-,-,false",
        ]
    );
}

#[test]
fn test_xml_documentation_fills_missing_descriptions() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<?xml version="1.0"?>
<doc>
  <assembly><name>Billing</name></assembly>
  <members>
    <member name="P:Billing.Invoice.Paid">
      <summary>
        Whether the invoice is settled.
      </summary>
    </member>
    <member name="P:Billing.Invoice.Total">
      <summary>Shadowed by the attribute.</summary>
    </member>
  </members>
</doc>"#
    )
    .unwrap();

    let options = ExportOptions::new().with_xml_documentation(file.path());
    let markdown = export_model_as_markdown::<Invoice>(&options);

    assert!(markdown.contains("| Paid | bool | Whether the invoice is settled. | - | false |"));
    assert!(markdown.contains("| Total | f64 | Gross amount. |"));
}

#[test]
fn test_malformed_xml_documentation_degrades() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<doc><members><member name=\"P:Billing.Invoice.Paid\">").unwrap();

    let options = ExportOptions::new().with_xml_documentation(file.path());
    let markdown = export_model_as_markdown::<Invoice>(&options);
    assert!(markdown.contains("| Paid | bool | - | - | false |"));
}

#[test]
fn test_unconstructible_models_use_fallback_values() {
    let session = export_model_as_csv::<Session>(&ExportOptions::new());
    assert!(session.ends_with("Token,String,-,-,-"));

    let connection = export_model_as_csv::<Connection>(&ExportOptions::new());
    assert!(connection.ends_with("Host,String,-,-,-"));
}

#[test]
fn test_blank_default_value_renders_null() {
    let padded = TypeInfo::named("Padded")
        .constructor(Constructor::new(|| Ok(Box::new(()) as Instance)))
        .property(
            PropertyInfo::new("Padding", "Padding")
                .getter(Getter::new(|_| Ok(PropertyValue::Other("  ".into())))),
        )
        .build();

    let csv = export_type(&padded, DocumentFormat::Csv, &ExportOptions::new()).unwrap();

    let expected = "Padded Model\n\
        Property,Type,Description,Attributes,Value\n\
        Padding,Padding,-,-,null";
    assert_eq!(csv, expected);
}

#[test]
fn test_json_export() {
    let json = export_model_as_json::<Person>(&ExportOptions::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["ModelName"], "Person");
    assert_eq!(value["Properties"][0]["Name"], "Name");
    assert_eq!(value["Properties"][0]["Type"], "String");
    assert_eq!(value["Properties"][0]["DefaultValue"], "\"Bob\"");
    assert_eq!(value["Properties"][1]["DefaultValue"], "true");
    assert!(json.contains("\n  \"Properties\": ["));
}

#[test]
fn test_yaml_export() {
    let yaml = export_model_as_yaml::<Person>(&ExportOptions::new()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(value["modelName"], serde_yaml::Value::from("Person"));
    assert_eq!(
        value["properties"][1]["name"],
        serde_yaml::Value::from("IsActive")
    );
    assert_eq!(
        value["properties"][1]["defaultValue"],
        serde_yaml::Value::from("true")
    );
}

#[test]
fn test_batch_export_concatenates_singles() {
    let options = ExportOptions::new();
    let types = vec![Person::type_info(), Invoice::type_info(), Session::type_info()];

    for format in DocumentFormat::ALL {
        let batch = export_models(&types, format, &options).unwrap();
        let singles = [
            export_model::<Person>(format, &options).unwrap(),
            export_model::<Invoice>(format, &options).unwrap(),
            export_model::<Session>(format, &options).unwrap(),
        ];
        let separator = match format {
            DocumentFormat::Markdown | DocumentFormat::Csv => "\n\n",
            DocumentFormat::Json => "\n",
            DocumentFormat::Yaml => "---\n",
        };
        assert_eq!(batch, singles.join(separator), "format {}", format);
    }
}

#[test]
fn test_empty_batch() {
    let batch = export_models(&[], DocumentFormat::Json, &ExportOptions::new()).unwrap();
    assert_eq!(batch, "");
}
