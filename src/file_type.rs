//! File type detection by extension.
//!
//! Decides whether a file opens in the markdown editor, a plain editor,
//! or preview only.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    TypeScript,
    JavaScript,
    Text,
    Image,
    Json,
    Unknown,
}

/// How a file can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Preview,
    Edit,
    Both,
}

const KNOWN: &[(FileType, &[&str])] = &[
    (FileType::Markdown, &["md", "markdown"]),
    (FileType::TypeScript, &["ts", "tsx"]),
    (FileType::JavaScript, &["js", "jsx"]),
    (FileType::Text, &["txt", "log"]),
    (FileType::Json, &["json"]),
    (
        FileType::Image,
        &["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp"],
    ),
];

impl FileType {
    /// Detect the type of `path` from its extension, case-insensitively.
    pub fn detect(path: &Path) -> Self {
        let Some(ext) = file_extension(path) else {
            return Self::Unknown;
        };
        KNOWN
            .iter()
            .find(|(_, exts)| exts.contains(&ext.as_str()))
            .map_or(Self::Unknown, |(file_type, _)| *file_type)
    }

    pub const fn editor_mode(self) -> EditorMode {
        match self {
            Self::Markdown => EditorMode::Both,
            Self::TypeScript | Self::JavaScript | Self::Text | Self::Json => EditorMode::Edit,
            Self::Image | Self::Unknown => EditorMode::Preview,
        }
    }

    /// Syntax-highlight language for the editor, if any.
    pub const fn language(self) -> Option<&'static str> {
        match self {
            Self::Markdown => Some("markdown"),
            Self::TypeScript => Some("typescript"),
            Self::JavaScript => Some("javascript"),
            Self::Json => Some("json"),
            Self::Text | Self::Image | Self::Unknown => None,
        }
    }

    pub const fn supports_preview(self) -> bool {
        matches!(self, Self::Markdown | Self::Image)
    }

    pub const fn is_editable(self) -> bool {
        matches!(self.editor_mode(), EditorMode::Edit | EditorMode::Both)
    }
}

/// Lowercased extension of `path`, if it has one.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

pub fn is_editable_file(path: &Path) -> bool {
    FileType::detect(path).is_editable()
}

pub fn is_previewable_file(path: &Path) -> bool {
    FileType::detect(path).supports_preview()
}
