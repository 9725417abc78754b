//! Template registration, expansion, and startup configuration

use class_factory::{new_class, ClassFactory, FactoryConfig};
use class_factory_test_utils::fixture_oracle;

#[test]
fn registered_template_expands_in_order() {
    let mut factory = ClassFactory::new(fixture_oracle());
    factory.set_template("t", ["a", "b"]);

    let class = new_class(["t", "c"]);
    let terminals: Vec<&str> = class.terminals(factory.templates()).collect();
    assert_eq!(terminals, ["a", "b", "c"]);
}

#[test]
fn nested_templates_expand_depth_first() {
    let mut factory = ClassFactory::new(fixture_oracle());
    factory.set_template("t1", ["a"]);
    factory.set_template("t2", ["t1", "b"]);

    let class = new_class(["t2"]);
    let terminals: Vec<&str> = class.terminals(factory.templates()).collect();
    assert_eq!(terminals, ["a", "b"]);
}

#[test]
fn loggable_template_classifies_members() {
    let mut factory = ClassFactory::new(fixture_oracle());
    factory.set_template("loggable", ["LoggerAwareInterface", "LoggerAwareTrait"]);

    let class = new_class(["loggable"]);
    assert_eq!(
        class
            .implements(factory.templates(), factory.oracle())
            .unwrap(),
        ["LoggerAwareInterface"]
    );
    assert_eq!(
        class.uses(factory.templates(), factory.oracle()).unwrap(),
        ["LoggerAwareTrait"]
    );
    assert!(class
        .extends(factory.templates(), factory.oracle())
        .unwrap()
        .is_empty());
}

#[test]
fn template_count_reflects_expansion() {
    let mut factory = ClassFactory::new(fixture_oracle());
    factory.set_template("loggable", ["LoggerAwareInterface", "LoggerAwareTrait"]);

    let class = new_class(["loggable", "SomeClass"]);
    assert_eq!(class.count(factory.templates()), 3);
}

#[test]
fn from_config_boot_sequence_end_to_end() {
    let json = r#"{
        "use_eval": false,
        "templates": {
            "loggable": ["LoggerAwareInterface", "LoggerAwareTrait"]
        }
    }"#;
    let config: FactoryConfig = serde_json::from_str(json).unwrap();
    let factory = ClassFactory::from_config(config, fixture_oracle());

    let class = new_class(["loggable"]);
    let source = factory.source(&class).unwrap();
    assert_eq!(
        source,
        "return fn (...args) => new class(...args) implements LoggerAwareInterface { use LoggerAwareTrait; };"
    );
}
