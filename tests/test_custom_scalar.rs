use env_loadr::{optional, required, Owned, ParseError, Requirement, Scalar, Value, VarSet};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Environment {
    Prod,
    Dev,
}

impl Scalar for Environment {
    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "prod" | "production" => Ok(Self::Prod),
            "dev" | "development" => Ok(Self::Dev),
            _ => Err(ParseError::custom("expected 'dev' or 'prod'")),
        }
    }

    fn render_env(&self) -> String {
        match self {
            Self::Prod => "prod".to_string(),
            Self::Dev => "dev".to_string(),
        }
    }
}

/// Comma separated list, a value type that is not a plain scalar
#[derive(Debug, Default)]
struct Hosts(Vec<String>);

impl Value for Hosts {
    type Output = Vec<String>;

    fn set(&mut self, raw: &str) -> Result<(), ParseError> {
        self.0 = raw.split(',').map(|h| h.trim().to_string()).collect();
        Ok(())
    }

    fn render(&self) -> String {
        self.0.join(",")
    }

    fn get(&self) -> Vec<String> {
        self.0.clone()
    }
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_custom_scalar_parses() {
    let mut vars = VarSet::new();
    let environment = vars.add("ENVIRONMENT", required(), Owned::new(Environment::Dev), "");

    vars.try_parse_from(&env(&[("ENVIRONMENT", "production")]))
        .unwrap();
    assert_eq!(vars.get(environment), Some(Environment::Prod));
    assert_eq!(vars.to_string(), "ENVIRONMENT=prod\n");
}

#[test]
fn test_custom_scalar_error_is_reported() {
    colored::control::set_override(false);

    let mut vars = VarSet::new();
    vars.add("ENVIRONMENT", required(), Owned::new(Environment::Dev), "");

    let error = vars
        .try_parse_from(&env(&[("ENVIRONMENT", "staging")]))
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "** invalid value of environment variable ENVIRONMENT: expected 'dev' or 'prod'\n"
    );
}

#[test]
fn test_custom_requirement_on_custom_scalar() {
    let mut vars = VarSet::new();
    let environment = vars.add("ENVIRONMENT", optional(), Owned::new(Environment::Dev), "");
    vars.add(
        "SECRET_KEY",
        Requirement::custom(move |parsed| parsed.get(environment) == Some(Environment::Prod)),
        Owned::new(String::new()),
        "Signing key, required in production",
    );

    assert!(vars.try_parse_from(&env(&[])).is_ok());

    let error = vars
        .try_parse_from(&env(&[("ENVIRONMENT", "prod")]))
        .unwrap_err();
    assert_eq!(error.missing_keys(), vec!["SECRET_KEY"]);
}

#[test]
fn test_custom_value_type() {
    let mut vars = VarSet::new();
    let hosts = vars.add("HOSTS", optional(), Hosts::default(), "Upstream hosts");

    vars.try_parse_from(&env(&[("HOSTS", "a.example, b.example")]))
        .unwrap();
    assert_eq!(
        vars.get(hosts),
        Some(vec!["a.example".to_string(), "b.example".to_string()])
    );
    assert_eq!(vars.to_string(), "# Upstream hosts\nHOSTS=a.example,b.example\n");
}

#[cfg(feature = "serde")]
#[test]
fn test_describe_serializes() {
    let mut vars = VarSet::new();
    vars.add("ENVIRONMENT", required(), Owned::new(Environment::Dev), "Deployment");

    let json = serde_json::to_value(vars.describe()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "key": "ENVIRONMENT",
            "description": "Deployment",
            "value": "dev",
            "specified": false,
            "required": true,
        }])
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_owned_serializes_as_inner_value() {
    use env_loadr::{new_int, new_string};

    let port = new_int(8080);
    assert_eq!(serde_json::to_value(&port).unwrap(), serde_json::json!(8080));
    assert_eq!(
        serde_json::to_value(new_string("api")).unwrap(),
        serde_json::json!("api")
    );

    let back: Owned<isize> = serde_json::from_value(serde_json::json!(8080)).unwrap();
    assert_eq!(back, port);
    assert_eq!(Value::get(&back), 8080);
}
