use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use fix_filenames::config::{CONFIG_ENV, ConfigSource, locate_config};
use fix_filenames::load_config;

#[test]
#[serial]
fn env_var_names_the_config_file() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("env_config.xml");
    fs::write(&cfg_path, "<config><root>/from/env/config</root></config>").unwrap();

    // Set env for this process; serialize to avoid cross-test interference
    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg_path);
    }

    assert_eq!(locate_config(None), Some(ConfigSource::Env(cfg_path.clone())));
    let (_, cfg) = load_config(None).unwrap().expect("config loaded");
    assert_eq!(cfg.root, Some(PathBuf::from("/from/env/config")));

    // --config beats the env var
    let flag = Path::new("/some/flag.xml");
    assert_eq!(
        locate_config(Some(flag)),
        Some(ConfigSource::Flag(flag.to_path_buf()))
    );

    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
}

#[test]
#[serial]
fn missing_env_config_is_an_error() {
    let td = tempdir().unwrap();
    unsafe {
        std::env::set_var(CONFIG_ENV, td.path().join("absent.xml"));
    }
    let res = load_config(None);
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
    assert!(res.is_err());
}

#[test]
#[serial]
fn unset_env_falls_back_to_default_location() {
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
    match locate_config(None) {
        Some(ConfigSource::Default(p)) => assert!(p.ends_with("fix_filenames/config.xml")),
        None => {} // no home/config dir on this machine
        other => panic!("unexpected source: {other:?}"),
    }
}
