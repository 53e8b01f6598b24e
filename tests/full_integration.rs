//! Full integration tests merging every source kind together.

use flatmerge_config::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tempfile::TempDir;

const JSON_CONTENT: &str = r#"
{
    "args": {"value": {"to": {"override": {"by": {"json": "json_value"}}}}},
    "xml": {"value": {"to": {"override": {"by": {"json": "json_value"}}}}},
    "json": {
        "value": {
            "to": {
                "override": {"by": {"yaml": "json_value"}},
                "keep": "json_value"
            }
        }
    },
    "env": {"value": {"to": {"override": {"by": {"json": "json_value"}}}}}
}
"#;

const XML_CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config>
    <env>
        <value>
            <to>
                <override>
                    <by>
                        <xml>
                            xml_value
                        </xml>
                        <yaml>
                            xml_value
                        </yaml>
                    </by>
                </override>
                <keep>
                    xml_value
                </keep>
            </to>
        </value>
    </env>
    <args>
        <value>
            <to>
                <override>
                    <by>
                        <xml>
                            xml_value
                        </xml>
                    </by>
                </override>
            </to>
        </value>
    </args>
</config>
"#;

const YAML_CONTENT: &str = r#"
env:
  value:
    to:
      override:
        by:
          yaml: yaml_value

args:
  value:
    to:
      override:
        by:
          yaml: yaml_value
xml:
  value:
    to:
      override:
        by:
          yaml: yaml_value

json:
  value:
    to:
      override:
        by:
          yaml: yaml_value
"#;

struct Fixture {
    _dir: TempDir,
    json: PathBuf,
    xml: PathBuf,
    yaml: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("config.json");
        let xml = dir.path().join("config.xml");
        let yaml = dir.path().join("config.yaml");
        fs::write(&json, JSON_CONTENT.trim()).unwrap();
        fs::write(&xml, XML_CONTENT.trim()).unwrap();
        fs::write(&yaml, YAML_CONTENT.trim()).unwrap();
        Self {
            _dir: dir,
            json,
            xml,
            yaml,
        }
    }
}

fn env_entries() -> Vec<&'static str> {
    vec![
        "ENV_VALUE=env_value",
        "ENV_VALUE_TO_OVERRIDE_BY_ARGS=env_value",
        "ENV_VALUE_TO_OVERRIDE_BY_XML=env_value",
        "ENV_VALUE_TO_OVERRIDE_BY_JSON=env_value",
        "ENV_VALUE_TO_OVERRIDE_BY_YAML=env_value",
    ]
}

fn arg_list() -> Vec<&'static str> {
    vec![
        "ENV_VALUE_TO_OVERRIDE_BY_ARGS=args_value",
        "ARGS_VALUE_TO_OVERRIDE_BY_XML=args_value",
        "ARGS_VALUE_TO_OVERRIDE_BY_JSON=args_value",
        "ARGS_VALUE_TO_OVERRIDE_BY_YAML=args_value",
        "ARGS_VALUE_TO_KEEP=args_value",
    ]
}

fn text(store: &ConfigStore, key: &str) -> Option<String> {
    store.get_text(key)
}

#[test]
fn test_all_sources_in_order() {
    let fixture = Fixture::new();

    let store = ConfigStore::builder()
        .with_env_vars(env_entries())
        .with_arg_list(arg_list())
        .with_xml(&fixture.xml)
        .with_json(&fixture.json)
        .with_yaml(&fixture.yaml)
        .load()
        .unwrap();

    assert_eq!(text(&store, "env.value").as_deref(), Some("env_value"));

    // Env values are overridden by every later source
    assert_eq!(text(&store, "env.value.to.override.by.args").as_deref(), Some("args_value"));
    assert_eq!(text(&store, "env.value.to.override.by.xml").as_deref(), Some("xml_value"));
    assert_eq!(text(&store, "env.value.to.override.by.json").as_deref(), Some("json_value"));
    assert_eq!(text(&store, "env.value.to.override.by.yaml").as_deref(), Some("yaml_value"));

    // Args values are overridden by the files
    assert_eq!(text(&store, "args.value.to.override.by.xml").as_deref(), Some("xml_value"));
    assert_eq!(text(&store, "args.value.to.override.by.json").as_deref(), Some("json_value"));
    assert_eq!(text(&store, "args.value.to.override.by.yaml").as_deref(), Some("yaml_value"));
    assert_eq!(text(&store, "args.value.to.keep").as_deref(), Some("args_value"));

    // XML values are overridden by JSON and YAML
    assert_eq!(text(&store, "xml.value.to.override.by.json").as_deref(), Some("json_value"));
    assert_eq!(text(&store, "xml.value.to.override.by.yaml").as_deref(), Some("yaml_value"));
    assert_eq!(text(&store, "env.value.to.keep").as_deref(), Some("xml_value"));

    // JSON values are overridden by YAML
    assert_eq!(text(&store, "json.value.to.override.by.yaml").as_deref(), Some("yaml_value"));
    assert_eq!(text(&store, "json.value.to.keep").as_deref(), Some("json_value"));
}

#[test]
fn test_reversed_order_reverses_precedence() {
    let fixture = Fixture::new();

    let store = ConfigStore::builder()
        .with_file(&fixture.yaml)
        .with_file(&fixture.json)
        .with_file(&fixture.xml)
        .with_arg_list(arg_list())
        .with_env_vars(env_entries())
        .load()
        .unwrap();

    assert_eq!(text(&store, "env.value.to.override.by.args").as_deref(), Some("env_value"));
    assert_eq!(text(&store, "args.value.to.override.by.yaml").as_deref(), Some("args_value"));
    assert_eq!(text(&store, "env.value.to.override.by.yaml").as_deref(), Some("env_value"));
    assert_eq!(text(&store, "json.value.to.override.by.yaml").as_deref(), Some("json_value"));
}

#[test]
fn test_failure_keeps_earlier_sources() {
    let fixture = Fixture::new();
    let broken = fixture.json.with_file_name("broken.json");
    fs::write(&broken, "{ not json").unwrap();

    let store = ConfigStore::builder()
        .with_env_vars(env_entries())
        .with_json(&broken)
        .with_yaml(&fixture.yaml)
        .build();

    let err = store.load().unwrap_err();
    assert!(matches!(err.root(), ConfigError::ParseError { format: "json", .. }));

    assert_eq!(text(&store, "env.value").as_deref(), Some("env_value"));
    assert_eq!(text(&store, "env.value.to.override.by.yaml").as_deref(), Some("env_value"));
    assert!(!store.contains_key("json.value.to.override.by.yaml"));
}

#[test]
fn test_set_after_load() {
    let fixture = Fixture::new();
    let store = ConfigStore::builder().with_yaml(&fixture.yaml).load().unwrap();

    store.set("env.value.to.override.by.yaml", ConfigValue::raw(vec!["a", "b"]));
    let value = store.get("env.value.to.override.by.yaml", "");
    assert_eq!(value.downcast_ref::<Vec<&'static str>>(), Some(&vec!["a", "b"]));
}

#[test]
fn test_readers_during_reload() {
    let fixture = Fixture::new();
    let store = ConfigStore::builder()
        .with_env_vars(env_entries())
        .with_yaml(&fixture.yaml)
        .load()
        .unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut reads = 0usize;
                while !stop.load(Ordering::Relaxed) {
                    let value = store.get_text("env.value.to.override.by.yaml");
                    // Either the env value or the yaml override, never absent.
                    assert!(matches!(value.as_deref(), Some("env_value" | "yaml_value")));
                    reads += 1;
                }
                reads
            })
        })
        .collect();

    for _ in 0..20 {
        store.load().unwrap();
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(
        text(&store, "env.value.to.override.by.yaml").as_deref(),
        Some("yaml_value")
    );
}
