use assert_cmd::Command;
use git_dircompare::config::CompareConfig;
use tempfile::tempdir;

#[test]
fn config_loads_from_repo_config() {
    let td = tempdir().unwrap();
    let root = td.path();

    // Init a real git repo to have a .git/config
    let mut cmd = Command::new("git");
    cmd.current_dir(root).args(["init"]);
    cmd.assert().success();

    // Set our dircompare.* keys
    let mut cmd = Command::new("git");
    cmd.current_dir(root)
        .args(["config", "dircompare.tool", "meld"]);
    cmd.assert().success();
    let mut cmd = Command::new("git");
    cmd.current_dir(root)
        .args(["config", "dircompare.ref-limit", "7"]);
    cmd.assert().success();

    let cfg = CompareConfig::load(root).expect("load config");
    assert_eq!(cfg.tool.as_deref(), Some("meld"));
    assert_eq!(cfg.ref_limit, 7);
}

#[test]
fn config_defaults_apply_when_keys_are_unset() {
    let td = tempdir().unwrap();
    let root = td.path();

    let mut cmd = Command::new("git");
    cmd.current_dir(root).args(["init"]);
    cmd.assert().success();

    let cfg = CompareConfig::load(root).expect("load config");
    assert_eq!(cfg.tool, None);
    assert_eq!(cfg.ref_limit, 100);
}
