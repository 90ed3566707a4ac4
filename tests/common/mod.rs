use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagmeta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagmeta").unwrap();
    cmd.env_remove("TAGMETA_MANIFEST");
    cmd
}

/// The five-level meta-tag chain plus an implementation type carrying it
#[allow(dead_code)]
pub const CHAIN_MANIFEST: &str = r#"
[[declaration]]
name = "svc.Service"

[[declaration.tag]]
type = "meta.Documented"

[[declaration.tag]]
type = "meta.Retention"

[[declaration.tag]]
type = "meta.Target"

[[declaration.tag]]
type = "meta.Inherited"

[[declaration]]
name = "svc.Service2"

[[declaration.tag]]
type = "meta.Documented"

[[declaration.tag]]
type = "meta.Retention"

[[declaration.tag]]
type = "meta.Target"

[[declaration.tag]]
type = "meta.Inherited"

[[declaration.tag]]
type = "svc.Service"
attributes = { value = "X" }

[[declaration]]
name = "svc.Service3"

[[declaration.tag]]
type = "meta.Documented"

[[declaration.tag]]
type = "meta.Retention"

[[declaration.tag]]
type = "meta.Target"

[[declaration.tag]]
type = "meta.Inherited"

[[declaration.tag]]
type = "svc.Service2"

[[declaration]]
name = "svc.Service4"

[[declaration.tag]]
type = "meta.Documented"

[[declaration.tag]]
type = "meta.Retention"

[[declaration.tag]]
type = "meta.Target"

[[declaration.tag]]
type = "meta.Inherited"

[[declaration.tag]]
type = "svc.Service3"

[[declaration]]
name = "svc.Service5"

[[declaration.tag]]
type = "meta.Documented"

[[declaration.tag]]
type = "meta.Retention"

[[declaration.tag]]
type = "meta.Target"

[[declaration.tag]]
type = "meta.Inherited"

[[declaration.tag]]
type = "svc.Service4"

[[declaration]]
name = "app.OrderServiceImpl"

[[declaration.tag]]
type = "svc.Service5"

[[declaration]]
name = "ext.Unused"
"#;

#[allow(dead_code)]
pub fn write_chain_manifest(dir: &Path) {
    fs::write(dir.join("tagmeta.toml"), CHAIN_MANIFEST).unwrap();
}
