use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::ToolbarOptions;

/// Defaults that can be saved to a config file and overridden on the
/// command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub placeholder: Option<String>,
    pub code_placeholder: Option<String>,
    pub link_text: Option<String>,
    pub link_url: Option<String>,
    pub print_selection: bool,
}

impl ConfigFlags {
    /// Merge two flag sets. Options from `other` win; booleans are OR-ed.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            placeholder: other.placeholder.clone().or_else(|| self.placeholder.clone()),
            code_placeholder: other
                .code_placeholder
                .clone()
                .or_else(|| self.code_placeholder.clone()),
            link_text: other.link_text.clone().or_else(|| self.link_text.clone()),
            link_url: other.link_url.clone().or_else(|| self.link_url.clone()),
            print_selection: self.print_selection || other.print_selection,
        }
    }

    /// Toolbar settings with any configured text substituted for the defaults.
    pub fn toolbar_options(&self) -> ToolbarOptions {
        let defaults = ToolbarOptions::default();
        ToolbarOptions {
            placeholder: self.placeholder.clone().unwrap_or(defaults.placeholder),
            code_placeholder: self
                .code_placeholder
                .clone()
                .unwrap_or(defaults.code_placeholder),
            link_text: self.link_text.clone().unwrap_or(defaults.link_text),
            link_url: self.link_url.clone().unwrap_or(defaults.link_url),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("lumenote-md").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("lumenote-md")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("lumenote-md").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("lumenote-md")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".lumenote-mdrc")
}

/// Load flags from a config file. A missing file yields the defaults.
///
/// One flag per line, as `--flag`, `--flag value` or `--flag=value`. The
/// value is the rest of the line, so it may contain spaces, but it is trimmed:
/// leading and trailing spaces in a saved value are not kept. Blank lines and
/// `#` comments are ignored.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?flags, "loaded config");
    Ok(flags)
}

/// Split a config line into a flag and, if present, its value.
fn line_tokens(line: &str) -> Vec<String> {
    let flag_end = line.find(char::is_whitespace).unwrap_or(line.len());
    let (flag, rest) = line.split_at(flag_end);
    match flag.split_once('=') {
        Some((name, inline)) => {
            vec![name.to_string(), format!("{inline}{rest}").trim().to_string()]
        }
        None if rest.trim().is_empty() => vec![flag.to_string()],
        None => vec![flag.to_string(), rest.trim().to_string()],
    }
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# lumenote-md defaults (saved with --save)".to_string());
    if let Some(value) = &flags.placeholder {
        lines.push(format!("--placeholder {value}"));
    }
    if let Some(value) = &flags.code_placeholder {
        lines.push(format!("--code-placeholder {value}"));
    }
    if let Some(value) = &flags.link_text {
        lines.push(format!("--link-text {value}"));
    }
    if let Some(value) = &flags.link_url {
        lines.push(format!("--link-url {value}"));
    }
    if flags.print_selection {
        lines.push("--print-selection".to_string());
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

/// Parse `--flag value` and `--flag=value` tokens. Unknown tokens are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--print-selection" {
            flags.print_selection = true;
        } else if let Some((name, value)) = token.split_once('=') {
            if let Some(slot) = option_slot(&mut flags, name) {
                *slot = Some(value.to_string());
            }
        } else if let Some(slot) = option_slot(&mut flags, token) {
            if let Some(next) = tokens.get(i + 1) {
                *slot = Some(next.clone());
                i += 1;
            }
        }
        i += 1;
    }
    flags
}

fn option_slot<'a>(flags: &'a mut ConfigFlags, name: &str) -> Option<&'a mut Option<String>> {
    match name {
        "--placeholder" => Some(&mut flags.placeholder),
        "--code-placeholder" => Some(&mut flags.code_placeholder),
        "--link-text" => Some(&mut flags.link_text),
        "--link-url" => Some(&mut flags.link_url),
        _ => None,
    }
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
            "lumenote-md",
            "--placeholder",
            "bold text",
            "--link-url=https://lumenote.app",
            "--print-selection",
            "format",
            "bold",
        ]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.placeholder.as_deref(), Some("bold text"));
        assert_eq!(flags.link_url.as_deref(), Some("https://lumenote.app"));
        assert!(flags.print_selection);
        assert_eq!(flags.link_text, None);
    }

    #[test]
    fn test_parse_flag_tokens_missing_value_is_ignored() {
        let flags = parse_flag_tokens(&tokens(&["--link-text"]));
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            placeholder: Some("file".to_string()),
            link_text: Some("here".to_string()),
            print_selection: true,
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            placeholder: Some("cli".to_string()),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.placeholder.as_deref(), Some("cli"));
        assert_eq!(merged.link_text.as_deref(), Some("here"));
        assert!(merged.print_selection);
    }

    #[test]
    fn test_toolbar_options_fall_back_to_defaults() {
        let flags = ConfigFlags {
            link_url: Some("https://lumenote.app".to_string()),
            ..ConfigFlags::default()
        };
        let options = flags.toolbar_options();
        assert_eq!(options.link_url, "https://lumenote.app");
        assert_eq!(options.placeholder, ToolbarOptions::default().placeholder);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".lumenote-mdrc");
        let flags = ConfigFlags {
            placeholder: Some("text".to_string()),
            code_placeholder: Some("code goes here".to_string()),
            link_text: Some("a link".to_string()),
            link_url: Some("https://example.org".to_string()),
            print_selection: true,
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_line_tokens_keep_rest_of_line() {
        assert_eq!(line_tokens("--print-selection"), vec!["--print-selection"]);
        assert_eq!(line_tokens("--link-text  read more "), vec!["--link-text", "read more"]);
        assert_eq!(line_tokens("--link-text=read more"), vec!["--link-text", "read more"]);
        assert_eq!(line_tokens("--link-url=a=b"), vec!["--link-url", "a=b"]);
    }

    #[test]
    fn test_saved_values_are_trimmed_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".lumenote-mdrc");
        let flags = ConfigFlags {
            placeholder: Some(" x ".to_string()),
            ..ConfigFlags::default()
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded.placeholder.as_deref(), Some("x"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
