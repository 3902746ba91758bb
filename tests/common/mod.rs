use assert_cmd::Command;

pub fn typikon_cmd() -> Command {
    let mut cmd = Command::cargo_bin("typikon").unwrap();
    cmd.env_remove("TYPIKON_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
