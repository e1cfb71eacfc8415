use crate::utils::error::{Result, ThemeError};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// `major.minor.patch` 三元組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    pub fn bump_patch(self) -> Self {
        Self {
            patch: self.patch + 1,
            ..self
        }
    }
}

impl FromStr for SemVer {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(ThemeError::VersionFormatError {
                value: s.to_string(),
                reason: "expected three dot-separated components".to_string(),
            });
        }

        let parse = |raw: &str, component: &str| -> Result<u64> {
            raw.parse::<u64>()
                .map_err(|_| ThemeError::VersionFormatError {
                    value: s.to_string(),
                    reason: format!("{} is not a non-negative integer: '{}'", component, raw),
                })
        };

        Ok(Self {
            major: parse(parts[0], "major")?,
            minor: parse(parts[1], "minor")?,
            patch: parse(parts[2], "patch")?,
        })
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// 把版本號同步寫入 package.json 與應用配置檔
pub struct VersionSynchronizer {
    manifest_path: PathBuf,
    app_config_path: PathBuf,
}

impl VersionSynchronizer {
    pub fn new(manifest_path: impl AsRef<Path>, app_config_path: impl AsRef<Path>) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
            app_config_path: app_config_path.as_ref().to_path_buf(),
        }
    }

    /// 計算並寫入下一個版本號，回傳新版本字串。
    ///
    /// 兩個檔案都先讀取再寫入，任一檔案缺失或格式錯誤時不做修改。
    /// 寫入依序進行，第二次寫入失敗時兩檔案會不一致（已知限制）。
    pub fn run(&self, explicit: Option<&str>) -> Result<String> {
        let mut manifest = read_json(&self.manifest_path)?;
        let mut app_config = read_json(&self.app_config_path)?;

        let current = version_field(&manifest, &self.manifest_path)?.to_string();
        tracing::debug!("Current version: {}", current);

        // 未指定新版本時遞增 patch
        let next = match explicit {
            Some(version) => version.to_string(),
            None => current.parse::<SemVer>()?.bump_patch().to_string(),
        };

        manifest["version"] = Value::String(next.clone());
        write_json(&self.manifest_path, &manifest)?;

        app_config["version"] = Value::String(next.clone());
        write_json(&self.app_config_path, &app_config)?;

        tracing::info!("Version updated: {} -> {}", current, next);
        Ok(next)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| ThemeError::FileError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn write_json(path: &Path, document: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(document)?;
    fs::write(path, text).map_err(|e| ThemeError::FileError {
        path: path.display().to_string(),
        source: e,
    })
}

fn version_field<'a>(document: &'a Value, path: &Path) -> Result<&'a str> {
    document
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| ThemeError::MissingFieldError {
            path: path.display().to_string(),
            field: "version".to_string(),
        })
}
