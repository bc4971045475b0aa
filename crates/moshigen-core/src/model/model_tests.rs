#![allow(non_snake_case)]

use super::*;
use crate::types::PrimitiveType;

const SIMPLE_MODEL_JSON: &str = r#"{
    "classes": [
        {
            "simple_name": "Simple",
            "enclosing": [{"package": "com.example"}],
            "modifiers": ["public", "final"],
            "fields": [
                {"name": "name", "type": "string", "modifiers": ["private", "final"]},
                {"name": "age", "type": {"primitive": "int"}, "modifiers": ["private", "final"]}
            ],
            "constructors": [
                {
                    "params": [
                        {"name": "name", "type": "string"},
                        {"name": "age", "type": {"primitive": "int"}}
                    ]
                }
            ],
            "annotations": [
                {
                    "type": "com.moshigen.GenerateMoshi",
                    "values": {"generateFactory": true}
                }
            ]
        }
    ]
}"#;

#[test]
fn ClassModel___from_json___parses_snapshot() {
    let model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();

    assert_eq!(model.classes.len(), 1);
    let class = &model.classes[0];
    assert_eq!(class.simple_name, "Simple");
    assert_eq!(class.kind, ClassKind::Class);
    assert!(class.is_public());
    assert_eq!(class.fields.len(), 2);
    assert_eq!(class.fields[1].ty, JavaType::Primitive(PrimitiveType::Int));
    assert_eq!(class.constructors[0].params.len(), 2);
}

#[test]
fn ClassModel___from_json___defaults_absent_collections() {
    let model = ClassModel::from_json(
        r#"{"classes": [{"simple_name": "Bare", "enclosing": [{"package": "p"}]}]}"#,
    )
    .unwrap();

    let class = &model.classes[0];
    assert_eq!(class.kind, ClassKind::Class);
    assert!(class.fields.is_empty());
    assert!(class.methods.is_empty());
    assert!(class.constructors.is_empty());
    assert!(class.superclass.is_none());
    assert!(!class.is_public());
}

#[test]
fn ClassDecl___qualified_name___joins_package_and_simple_name() {
    let model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();

    assert_eq!(model.classes[0].qualified_name(), "com.example.Simple");
    assert_eq!(model.classes[0].package(), Some("com.example"));
}

#[test]
fn ClassDecl___qualified_name___walks_enclosing_types() {
    let class = ClassDecl {
        kind: ClassKind::Class,
        simple_name: "Inner".to_string(),
        enclosing: vec![
            Scope::Type("Outer".to_string()),
            Scope::Package("com.example".to_string()),
        ],
        modifiers: vec![],
        superclass: None,
        interfaces: vec![],
        fields: vec![],
        methods: vec![],
        constructors: vec![],
        annotations: vec![],
    };

    assert_eq!(class.qualified_name(), "com.example.Outer.Inner");
    assert_eq!(class.package(), Some("com.example"));
}

#[test]
fn ClassDecl___package___none_without_package_scope() {
    let class = ClassDecl {
        kind: ClassKind::Class,
        simple_name: "Orphan".to_string(),
        enclosing: vec![Scope::Type("Outer".to_string())],
        modifiers: vec![],
        superclass: None,
        interfaces: vec![],
        fields: vec![],
        methods: vec![],
        constructors: vec![],
        annotations: vec![],
    };

    assert_eq!(class.package(), None);
    assert_eq!(class.qualified_name(), "Outer.Orphan");
}

#[test]
fn ClassDecl___is_parcelable___checks_interface_list() {
    let mut class = ClassDecl {
        kind: ClassKind::Class,
        simple_name: "P".to_string(),
        enclosing: vec![Scope::Package("p".to_string())],
        modifiers: vec![],
        superclass: None,
        interfaces: vec!["java.io.Serializable".to_string()],
        fields: vec![],
        methods: vec![],
        constructors: vec![],
        annotations: vec![],
    };
    assert!(!class.is_parcelable());

    class.interfaces.push(PARCELABLE_INTERFACE.to_string());
    assert!(class.is_parcelable());
}

#[test]
fn AnnotationUse___bool_value___reads_member_or_default() {
    let model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();
    let marker = model.classes[0].annotation(GENERATE_MOSHI).unwrap();

    assert!(marker.bool_value("generateFactory", false));
    assert!(marker.bool_value("generateWriter", true));
    assert!(!marker.bool_value("debugLogs", false));
}

#[test]
fn AnnotationUse___string_value___ignores_wrong_member_kind() {
    let annotation: AnnotationUse = serde_json::from_str(
        r#"{"type": "com.squareup.moshi.Json", "values": {"name": "first_name", "flag": true}}"#,
    )
    .unwrap();

    assert_eq!(annotation.string_value("name"), Some("first_name"));
    assert_eq!(annotation.string_value("flag"), None);
    assert_eq!(annotation.string_value("missing"), None);
}

#[test]
fn AnnotationUse___class_list___reads_reference_lists() {
    let annotation: AnnotationUse = serde_json::from_str(
        r#"{
            "type": "com.moshigen.GenerateMoshiFactory",
            "values": {"value": ["com.example.Simple", "com.example.Nested"]}
        }"#,
    )
    .unwrap();

    assert_eq!(
        annotation.class_list("value"),
        ["com.example.Simple", "com.example.Nested"]
    );
    assert!(annotation.class_list("missing").is_empty());
}

#[test]
fn ClassModel___validate___accepts_distinct_classes() {
    let model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();

    assert!(model.validate().is_ok());
}

#[test]
fn ClassModel___validate___rejects_duplicate_qualified_names() {
    let mut model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();
    model.classes.push(model.classes[0].clone());

    let err = model.validate().unwrap_err();

    assert!(matches!(err, GeneratorError::DuplicateClass(name) if name == "com.example.Simple"));
}

#[test]
fn ClassModel___find___locates_by_qualified_name() {
    let model = ClassModel::from_json(SIMPLE_MODEL_JSON).unwrap();

    assert!(model.find("com.example.Simple").is_some());
    assert!(model.find("com.example.Missing").is_none());
}
