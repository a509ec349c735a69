use crate::error::{BoardError, Result};
use crate::types::config::BoardConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "board.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".contrib-board/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/contrib-board/config.toml";

pub fn load_config(root: &Path) -> Result<Option<BoardConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Config files in merge order. Later layers override earlier ones, and
/// any of them may be absent.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

/// Merges every layer that exists. `None` means no config file was found
/// at all, so callers fall back to defaults and CLI flags.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<BoardConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut layers = Vec::new();
    for path in layer_paths(root, global_path) {
        if !path.is_file() {
            continue;
        }
        merge_toml(&mut merged, read_toml_value(&path)?);
        layers.push(path);
    }

    if layers.is_empty() {
        return Ok(None);
    }

    let cfg: BoardConfig = merged.try_into()?;
    cfg.validate()?;
    tracing::debug!(?layers, "config loaded");
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| BoardError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
