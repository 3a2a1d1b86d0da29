use crate::core::ConfigProvider;
use crate::utils::error::{ManifestError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BOXES_KEY: &str = "move-manifest-boxes";
pub const DEFAULT_LABEL_WIDTH_KEY: &str = "move-manifest-label-width";
pub const DEFAULT_LABEL_WIDTH_CM: f64 = 15.0;
pub const DEFAULT_EXPORT_FILENAME: &str = "moving-boxes.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_boxes_key")]
    pub boxes_key: String,
    #[serde(default = "default_label_width_key")]
    pub label_width_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_label_width")]
    pub default_width_cm: f64,
    pub max_height_cm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_boxes_key() -> String {
    DEFAULT_BOXES_KEY.to_string()
}

fn default_label_width_key() -> String {
    DEFAULT_LABEL_WIDTH_KEY.to_string()
}

fn default_label_width() -> f64 {
    DEFAULT_LABEL_WIDTH_CM
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            boxes_key: default_boxes_key(),
            label_width_key: default_label_width_key(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            default_width_cm: default_label_width(),
            max_height_cm: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
        }
    }
}

impl ManifestConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ManifestError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ManifestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MANIFEST_DATA_DIR})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("storage.data_dir", &self.storage.data_dir)?;
        validate_key("storage.boxes_key", &self.storage.boxes_key)?;
        validate_key("storage.label_width_key", &self.storage.label_width_key)?;
        validation::validate_positive_dimension("labels.default_width_cm", self.labels.default_width_cm)?;

        if let Some(max_height) = self.labels.max_height_cm {
            validation::validate_positive_dimension("labels.max_height_cm", max_height)?;
        }

        validation::validate_non_empty_string("export.filename", &self.export.filename)?;
        Ok(())
    }
}

/// Storage keys become file names, so they may not name a path.
fn validate_key(field_name: &str, key: &str) -> Result<()> {
    validation::validate_non_empty_string(field_name, key)?;

    if key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(ManifestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Key must not contain path separators".to_string(),
        });
    }
    Ok(())
}

impl ConfigProvider for ManifestConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn boxes_key(&self) -> &str {
        &self.storage.boxes_key
    }

    fn label_width_key(&self) -> &str {
        &self.storage.label_width_key
    }

    fn default_label_width_cm(&self) -> f64 {
        self.labels.default_width_cm
    }

    fn max_label_height_cm(&self) -> Option<f64> {
        self.labels.max_height_cm
    }
}

impl Validate for ManifestConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
