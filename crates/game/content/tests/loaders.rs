use std::fs;

use game_content::{ConfigLoader, ContentFactory, LayoutLoader};
use game_core::{GameConfig, LevelSource};

#[test]
fn factory_reads_config_and_levels_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("levels")).unwrap();
    fs::write(dir.path().join("config.toml"), "pellet_value = 3\n").unwrap();
    fs::write(dir.path().join("levels/tiny.txt"), "#####\n#P.F#\n#####\n").unwrap();

    let factory = ContentFactory::new(dir.path());
    let layout = factory.load_level("tiny").unwrap();
    let level = layout.create_level().unwrap();

    let values: Vec<u32> = level.collectibles().map(|c| c.value()).collect();
    assert_eq!(values, vec![3, GameConfig::DEFAULT_BONUS_VALUE]);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();

    assert_eq!(config, GameConfig::default());
}

#[test]
fn missing_files_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let error = LayoutLoader::load(&path).unwrap_err();

    assert!(error.to_string().contains("absent.txt"));
    assert!(ConfigLoader::load(&path).is_err());
}

#[test]
fn broken_layouts_report_the_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "#P#\n#?#\n").unwrap();

    let error = LayoutLoader::load(&path).unwrap_err();

    assert!(error.to_string().contains("unknown tile '?'"));
}
