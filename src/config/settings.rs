use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::render::helpers::cursor::PageGeometry;
use crate::render::helpers::fonts::FontFamily;

use super::defaults::*;

/// Runtime settings for report generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page geometry (points, top-down)
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub content_right: f32,
    pub margin_top: f32,
    pub content_bottom: f32,

    pub font_family: FontFamily,

    // Branding shown in the page header
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,

    /// Redraw the table header bar after a page break
    pub repeat_table_header: bool,
    /// Run the lopdf compression pass on the finished document
    pub compress: bool,

    // Photo fetching
    pub fetch_timeout: Duration,
    pub fetch_concurrency: usize,
    pub max_image_bytes: usize,

    /// Date stamped in every footer; today when unset
    pub generated_on: Option<NaiveDate>,

    /// Check-item label overrides keyed by check-item key
    pub check_labels: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin_left: DEFAULT_MARGIN_LEFT,
            content_right: DEFAULT_CONTENT_RIGHT,
            margin_top: DEFAULT_MARGIN_TOP,
            content_bottom: DEFAULT_CONTENT_BOTTOM,

            font_family: FontFamily::SansSerif,

            company_name: DEFAULT_COMPANY_NAME.to_string(),
            company_address: DEFAULT_COMPANY_ADDRESS.to_string(),
            company_phone: DEFAULT_COMPANY_PHONE.to_string(),

            repeat_table_header: true,
            compress: true,

            fetch_timeout: Duration::from_secs_f32(DEFAULT_FETCH_TIMEOUT_SECS),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,

            generated_on: None,
            check_labels: HashMap::new(),
        }
    }
}

/// On-disk TOML settings; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub company: CompanySection,
    pub layout: LayoutSection,
    pub fetch: FetchSection,
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompanySection {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSection {
    pub font_family: Option<String>,
    pub repeat_table_header: Option<bool>,
    pub compress: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchSection {
    pub timeout_secs: Option<f32>,
    pub concurrency: Option<usize>,
    pub max_bytes: Option<usize>,
}

impl Settings {
    /// Merge a TOML settings file over the current values
    pub fn with_file(self, path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SettingsFile =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        self.with_settings_file(file)
    }

    pub fn with_settings_file(mut self, file: SettingsFile) -> Result<Self, ConfigError> {
        if let Some(name) = file.company.name {
            self.company_name = name;
        }
        if let Some(address) = file.company.address {
            self.company_address = address;
        }
        if let Some(phone) = file.company.phone {
            self.company_phone = phone;
        }

        if let Some(ref family) = file.layout.font_family {
            self.font_family = FontFamily::from_name(family);
        }
        if let Some(repeat) = file.layout.repeat_table_header {
            self.repeat_table_header = repeat;
        }
        if let Some(compress) = file.layout.compress {
            self.compress = compress;
        }

        if let Some(secs) = file.fetch.timeout_secs {
            self.fetch_timeout = timeout_from_secs(secs)?;
        }
        if let Some(concurrency) = file.fetch.concurrency {
            if concurrency == 0 {
                return Err(ConfigError::Invalid(
                    "fetch.concurrency must be at least 1".to_string(),
                ));
            }
            self.fetch_concurrency = concurrency;
        }
        if let Some(max_bytes) = file.fetch.max_bytes {
            self.max_image_bytes = max_bytes;
        }

        self.check_labels.extend(file.labels);
        Ok(self)
    }

    /// Apply CLI overrides (these win over the settings file)
    pub fn with_args(mut self, args: &Args) -> Result<Self, ConfigError> {
        if let Some(secs) = args.timeout {
            self.fetch_timeout = timeout_from_secs(secs)?;
        }
        if let Some(n) = args.concurrency {
            self.fetch_concurrency = n as usize;
        }
        if let Some(date) = args.generated_on {
            self.generated_on = Some(date);
        }
        if let Some(font) = args.font {
            self.font_family = font.into();
        }
        if args.no_repeat_header {
            self.repeat_table_header = false;
        }
        if args.no_compress {
            self.compress = false;
        }
        Ok(self)
    }

    /// Page geometry for the layout engine
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            width: self.page_width,
            height: self.page_height,
            left: self.margin_left,
            right: self.content_right,
            top: self.margin_top,
            bottom: self.content_bottom,
        }
    }

    /// Usable content width
    pub fn content_width(&self) -> f32 {
        self.content_right - self.margin_left
    }

    /// The footer date, falling back to today
    pub fn generation_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn timeout_from_secs(secs: f32) -> Result<Duration, ConfigError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "fetch timeout must be positive, got {}",
            secs
        )));
    }
    Ok(Duration::from_secs_f32(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_a4() {
        let settings = Settings::default();
        let geometry = settings.geometry();
        assert!((geometry.width - 595.28).abs() < 0.01);
        assert!((geometry.height - 841.89).abs() < 0.01);
        assert!((settings.content_width() - 515.0).abs() < 0.01);
        assert!(geometry.bottom < geometry.height);
    }

    #[test]
    fn test_settings_file_overrides() {
        let file: SettingsFile = toml::from_str(
            r#"
            [company]
            name = "ACME MOTORS"

            [layout]
            font_family = "Times"
            repeat_table_header = false

            [fetch]
            timeout_secs = 2.5
            concurrency = 2

            [labels]
            lights = "Lamps"
            "#,
        )
        .unwrap();

        let settings = Settings::default().with_settings_file(file).unwrap();
        assert_eq!(settings.company_name, "ACME MOTORS");
        assert_eq!(settings.company_phone, DEFAULT_COMPANY_PHONE);
        assert_eq!(settings.font_family, FontFamily::Serif);
        assert!(!settings.repeat_table_header);
        assert_eq!(settings.fetch_timeout, Duration::from_millis(2500));
        assert_eq!(settings.fetch_concurrency, 2);
        assert_eq!(settings.check_labels.get("lights").map(String::as_str), Some("Lamps"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file: SettingsFile = toml::from_str("[fetch]\nconcurrency = 0\n").unwrap();
        assert!(Settings::default().with_settings_file(file).is_err());

        let file: SettingsFile = toml::from_str("[fetch]\ntimeout_secs = -1.0\n").unwrap();
        assert!(Settings::default().with_settings_file(file).is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let parsed: Result<SettingsFile, _> = toml::from_str("[layout]\nmargins = 3\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_fixed_generation_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let settings = Settings {
            generated_on: Some(date),
            ..Default::default()
        };
        assert_eq!(settings.generation_date(), date);
    }
}
