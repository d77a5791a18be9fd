use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::templates::Locale;
use crate::toolbar::ToolbarOptions;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub verbose: bool,
    pub locale: Option<Locale>,
    pub table_rows: Option<usize>,
    pub table_cols: Option<usize>,
}

impl ConfigFlags {
    /// Merge `other` over `self`; options set in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            verbose: self.verbose || other.verbose,
            locale: other.locale.or(self.locale),
            table_rows: other.table_rows.or(self.table_rows),
            table_cols: other.table_cols.or(self.table_cols),
        }
    }

    pub fn toolbar_options(&self) -> ToolbarOptions {
        let defaults = ToolbarOptions::default();
        ToolbarOptions {
            table_rows: self.table_rows.unwrap_or(defaults.table_rows),
            table_cols: self.table_cols.unwrap_or(defaults.table_cols),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("marktool").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("marktool")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("marktool").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("marktool").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".marktoolrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# marktool defaults (saved with --save)".to_string());
    if flags.verbose {
        lines.push("--verbose".to_string());
    }
    if let Some(locale) = flags.locale {
        lines.push(format!("--locale {}", locale_name(locale)));
    }
    if let Some(rows) = flags.table_rows {
        lines.push(format!("--table-rows {rows}"));
    }
    if let Some(cols) = flags.table_cols {
        lines.push(format!("--table-cols {cols}"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list, ignoring everything else.
///
/// Accepts both `--flag value` and `--flag=value`. Values that do not
/// parse leave the option unset.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let takes_value = matches!(name, "--locale" | "--table-rows" | "--table-cols");
        let value = if takes_value && inline.is_none() {
            i += 1;
            tokens.get(i).map(String::as_str)
        } else {
            inline
        };
        match name {
            "--verbose" | "-v" if inline.is_none() => flags.verbose = true,
            "--locale" => flags.locale = value.and_then(parse_locale),
            "--table-rows" => flags.table_rows = value.and_then(parse_dimension),
            "--table-cols" => flags.table_cols = value.and_then(parse_dimension),
            _ => {}
        }
        i += 1;
    }
    flags
}

fn parse_locale(s: &str) -> Option<Locale> {
    match s {
        "en" => Some(Locale::En),
        "zh" => Some(Locale::Zh),
        _ => None,
    }
}

const fn locale_name(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Zh => "zh",
    }
}

fn parse_dimension(s: &str) -> Option<usize> {
    s.parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "marktool",
            "apply",
            "notes.md",
            "bold-button",
            "--verbose",
            "--locale",
            "en",
            "--table-rows=5",
            "--table-cols",
            "2",
        ]);
        let flags = parse_flag_tokens(&args);
        assert!(flags.verbose);
        assert_eq!(flags.locale, Some(Locale::En));
        assert_eq!(flags.table_rows, Some(5));
        assert_eq!(flags.table_cols, Some(2));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let flags = parse_flag_tokens(&tokens(&["--locale=fr", "--table-rows", "0", "--table-cols=x"]));
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_value_flag_at_end_without_value() {
        let flags = parse_flag_tokens(&tokens(&["--table-rows"]));
        assert_eq!(flags.table_rows, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            verbose: true,
            locale: Some(Locale::En),
            table_rows: Some(4),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            locale: Some(Locale::Zh),
            table_cols: Some(6),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.verbose);
        assert_eq!(merged.locale, Some(Locale::Zh));
        assert_eq!(merged.table_rows, Some(4));
        assert_eq!(merged.table_cols, Some(6));
    }

    #[test]
    fn test_toolbar_options_default_to_three_by_three() {
        let options = ConfigFlags::default().toolbar_options();
        assert_eq!(options, ToolbarOptions { table_rows: 3, table_cols: 3 });
        let options = ConfigFlags { table_cols: Some(5), ..ConfigFlags::default() }.toolbar_options();
        assert_eq!(options, ToolbarOptions { table_rows: 3, table_cols: 5 });
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".marktoolrc");
        let flags = ConfigFlags {
            verbose: true,
            locale: Some(Locale::En),
            table_rows: Some(2),
            table_cols: Some(7),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
