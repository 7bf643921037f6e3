//! Integration tests for controller exports


use modeldoc_core::{
    export_controller, export_controller_info, export_controllers, Attribute,
    ControllerDescriptor, DocumentFormat, ExportOptions, MethodInfo, Reflect, TypeInfo,
    XmlDocumentation,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use test_support::{OrdersController, UsersController};

#[test]
fn test_declared_public_methods_only() {
    let users =
        ControllerDescriptor::build(&UsersController::type_info(), &XmlDocumentation::empty());
    let names: Vec<_> = users.methods.iter().map(|m| m.method_name.as_str()).collect();
    assert_eq!(names, vec!["Index", "Get", "Create"]);
}

#[test]
fn test_users_markdown() {
    let markdown =
        export_controller::<UsersController>(DocumentFormat::Markdown, &ExportOptions::new())
            .unwrap();

    let expected = "# UsersController Controller\n\
        ## Index\n\
        - **HTTP Method:** UNKNOWN\n\
        - **Route:** `/Users/`\n\
        - **Description:** -\n\
        - **Parameters:**\n\
        \x20 - No parameters.\n\
        \n\
        ## Get\n\
        - **HTTP Method:** HTTPGET\n\
        - **Route:** `/Users/Get`\n\
        - **Description:** -\n\
        - **Parameters:**\n\
        | Name | Type | Required |\n\
        |------|------|----------|\n\
        | id | i32 | Yes |\n\
        \n\
        ## Create\n\
        - **HTTP Method:** HTTPPOST\n\
        - **Route:** `/Users/Create`\n\
        - **Description:** Register a user.\n\
        - **Parameters:**\n\
        | Name | Type | Required |\n\
        |------|------|----------|\n\
        | name | String | Yes |\n\
        | notify | bool | No |";
    assert_eq!(markdown, expected);
}

#[test]
fn test_orders_csv_uses_route_prefix() {
    let csv = export_controller::<OrdersController>(DocumentFormat::Csv, &ExportOptions::new())
        .unwrap();

    let expected = "OrdersController Controller\n\
        List,HTTP Method,HTTPGET,Route,`/api/orders/List`,Description,All orders.,Parameters,\n\
        -";
    assert_eq!(csv, expected);
}

#[test]
fn test_verb_is_the_uppercased_attribute_kind() {
    let users = TypeInfo::named("UsersController")
        .method(MethodInfo::new("Get").attribute(Attribute::new("HttpGetAttribute")))
        .method(MethodInfo::new("Health").attribute(Attribute::new("Http")))
        .method(MethodInfo::new("Index"))
        .build();

    let csv = export_controller_info(&users, DocumentFormat::Csv, &ExportOptions::new()).unwrap();

    let expected = "UsersController Controller\n\
        Get,HTTP Method,HTTPGET,Route,`/Users/Get`,Description,-,Parameters,\n\
        -\n\
        \n\
        Health,HTTP Method,HTTP,Route,`/Users/Health`,Description,-,Parameters,\n\
        -\n\
        \n\
        Index,HTTP Method,UNKNOWN,Route,`/Users/`,Description,-,Parameters,\n\
        -";
    assert_eq!(csv, expected);
}

#[test]
fn test_structured_controller_shape() {
    let json = export_controller::<OrdersController>(DocumentFormat::Json, &ExportOptions::new())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ControllerName"], "OrdersController");
    assert_eq!(value["RoutePrefix"], "api/orders");
    assert_eq!(value["Methods"][0]["HttpVerb"], "HTTPGET");
    assert_eq!(value["Methods"][0]["Route"], "/api/orders/List");
    assert_eq!(value["Methods"][0]["Parameters"], serde_json::json!([]));

    let yaml = export_controller::<UsersController>(DocumentFormat::Yaml, &ExportOptions::new())
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["controllerName"], serde_yaml::Value::from("UsersController"));
    assert_eq!(value["routePrefix"], serde_yaml::Value::from(""));
    assert_eq!(
        value["methods"][2]["parameters"][1]["required"],
        serde_yaml::Value::from(false)
    );
}

#[test]
fn test_method_descriptions_from_xml_overloads() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<doc><members>
<member name="M:Api.UsersController.Get(System.Int32)"><summary>Fetch one user by <see cref="T:Api.User"/> id.</summary></member>
<member name="M:Api.UsersController.Create(System.String,System.Boolean)"><summary>Shadowed.</summary></member>
</members></doc>"#
    )
    .unwrap();

    let options = ExportOptions::new().with_xml_documentation(file.path());
    let csv = export_controller::<UsersController>(DocumentFormat::Csv, &options).unwrap();

    assert!(csv.contains("Description,Fetch one user by User id.,Parameters,"));
    assert!(csv.contains("Description,Register a user.,Parameters,"));
}

#[test]
fn test_controller_batch() {
    let options = ExportOptions::new();
    let types = vec![UsersController::type_info(), OrdersController::type_info()];

    let batch = export_controllers(&types, DocumentFormat::Markdown, &options).unwrap();
    let users = export_controller::<UsersController>(DocumentFormat::Markdown, &options).unwrap();
    let orders = export_controller::<OrdersController>(DocumentFormat::Markdown, &options).unwrap();

    assert_eq!(batch, format!("{}\n\n{}", users, orders));
}
