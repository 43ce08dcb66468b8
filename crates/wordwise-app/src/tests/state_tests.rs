use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wordwise_config::Config;
use wordwise_config::agent::AgentConfig;
use wordwise_config::store::StoreBackend;

use crate::profile::{ConfigSource, load_config};
use crate::state::AppState;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn fixture(dir: &TempDir) -> Config {
    let stopwords = write(dir.path(), "stop_words.txt", "the\na\nI\nsaw\n");
    let dict1 = write(
        dir.path(),
        "dictionary1.txt",
        "cat:a small feline|A cat sat.|Cats are pets.\ndog:a loyal canine|The dog barked.\n",
    );
    let dict2 = write(dir.path(), "dictionary2.txt", "bird:a feathered animal|A bird sang.\n");

    let mut config = Config {
        memory_limit: 2,
        stopwords_path: stopwords,
        agents: vec![AgentConfig::new("Brain1", dict1), AgentConfig::new("Brain2", dict2)],
        ..Config::default()
    };
    config.store.path = dir.path().join("word_context.redb").to_string_lossy().into_owned();
    config
}

#[test]
fn test_shared_durable_store() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::new(fixture(&dir)).unwrap();

    assert_eq!(state.pool.len(), 2);
    // Both agents read the one store holding both dictionaries.
    assert_eq!(
        state.pool.converse("I saw a bird"),
        "Let's talk more about bird. A bird sang."
    );
    assert_eq!(state.pool.define("cat"), "a small feline");
    assert!(dir.path().join("word_context.redb").exists());
}

#[test]
fn test_memory_limit_applied() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::new(fixture(&dir)).unwrap();

    for input in ["cat", "dog", "bird"] {
        state.pool.converse(input);
    }
    for agent in state.pool.agents() {
        assert_eq!(agent.memory().len(), 2);
        assert_eq!(agent.memory().turns().next().unwrap().user_input, "dog");
    }
}

#[test]
fn test_private_stores_vote() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture(&dir);
    config.store.backend = StoreBackend::Memory;
    let shared_dict = config.agents[0].dictionaries[0].clone();
    let bird_dict = config.agents[1].dictionaries[0].clone();
    config.agents = vec![
        AgentConfig {
            private_store: true,
            ..AgentConfig::new("Lonely", bird_dict)
        },
        AgentConfig::new("Brain1", shared_dict.clone()),
        AgentConfig::new("Brain2", shared_dict),
    ];

    let state = AppState::new(config).unwrap();
    // Lonely knows no cats, the two shared agents outvote it.
    assert_eq!(state.pool.best_reply("cat"), "Let's talk more about cat. A cat sat.");
    assert_eq!(state.pool.agents()[0].define("cat"), "Definition not found.");
    assert_eq!(state.pool.agents()[0].define("bird"), "a feathered animal");
}

#[test]
fn test_missing_stopwords_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture(&dir);
    config.stopwords_path = dir.path().join("absent.txt").to_string_lossy().into_owned();

    let err = AppState::new(config).err().unwrap();
    assert!(format!("{err:#}").contains("Resource not found"));
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture(&dir);
    config.store.backend = StoreBackend::Memory;
    let absent = dir.path().join("absent.txt");
    config.agents[1]
        .dictionaries
        .push(absent.to_string_lossy().into_owned());

    assert!(AppState::new(config).is_err());
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wordwise.json");
    fs::write(&path, r#"{ "memory_limit": 7, "agents": [] }"#).unwrap();

    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.memory_limit, 7);
    assert!(config.agents.is_empty());
}

#[test]
fn test_load_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::Missing(path));
    assert_eq!(config.agents.len(), 2);
}

#[test]
fn test_load_config_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "broken.json", "{ memory_limit: ");
    assert!(load_config(Some(Path::new(&path))).is_err());
}
