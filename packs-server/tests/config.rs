use packs_server::config::{load_config, PackConfig};
use packs_solver::{PackCalculatorService, Strategy};
use std::io::Write;

#[test]
fn test_load_inline_config() {
    let config = load_config(r#"{"packs": [250, 500, 1000]}"#).unwrap();
    assert_eq!(
        config,
        PackConfig {
            packs: vec![250, 500, 1000],
            strategy: Strategy::Search,
        }
    );
}

#[test]
fn test_load_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"packs": [23, 31, 53], "strategy": "dynamic"}}"#).unwrap();

    let config = load_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.packs, vec![23, 31, 53]);
    assert_eq!(config.strategy, Strategy::Dynamic);

    let calculator = config.into_calculator(None).unwrap();
    assert_eq!(calculator.strategy(), Strategy::Dynamic);
    assert_eq!(calculator.calculate_packs(107).unwrap().overage, 0);
}

#[test]
fn test_strategy_override() {
    let config = load_config(r#"{"packs": [250], "strategy": "dynamic"}"#).unwrap();
    let calculator = config.into_calculator(Some(Strategy::Search)).unwrap();
    assert_eq!(calculator.strategy(), Strategy::Search);
}

#[test]
fn test_missing_config_file() {
    let err = load_config("/nonexistent/packs.json").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_unparsable_config() {
    assert!(load_config(r#"{"sizes": [250]}"#).is_err());
    assert!(load_config(r#"{"packs": [250], "strategy": "greedy"}"#).is_err());
    assert!(load_config("packs").is_err());
}

#[test]
fn test_invalid_catalog_is_fatal() {
    for packs in [r#"{"packs": []}"#, r#"{"packs": [250, -1]}"#, r#"{"packs": [250, 250]}"#] {
        let config = load_config(packs).unwrap();
        let err = config.into_calculator(None).unwrap_err();
        assert!(err.to_string().contains("invalid pack catalog"));
    }
}

#[test]
fn test_dynamic_strategy_with_oversized_table_is_fatal() {
    let config = load_config(r#"{"packs": [1000003, 1000000], "strategy": "dynamic"}"#).unwrap();
    let err = config.clone().into_calculator(None).unwrap_err();
    assert!(format!("{:#}", err).contains("table entries for the dynamic strategy"));

    let calculator = config.into_calculator(Some(Strategy::Search)).unwrap();
    assert_eq!(calculator.strategy(), Strategy::Search);
}
