use std::path::Path;

pub const DIRECTORY: &str = "Directory";
pub const NO_EXTENSION: &str = "No Extension";
pub const UNKNOWN: &str = "Unknown";

const FILE_TYPES: &[(&str, &str)] = &[
    ("txt", "Text File"),
    ("pdf", "PDF Document"),
    ("doc", "Word Document"),
    ("docx", "Word Document"),
    ("xls", "Excel Spreadsheet"),
    ("xlsx", "Excel Spreadsheet"),
    ("jpg", "JPEG Image"),
    ("jpeg", "JPEG Image"),
    ("png", "PNG Image"),
    ("gif", "GIF Image"),
    ("mp3", "MP3 Audio"),
    ("mp4", "MP4 Video"),
    ("zip", "ZIP Archive"),
    ("py", "Python Script"),
    ("js", "JavaScript File"),
    ("html", "HTML File"),
    ("css", "CSS File"),
    ("json", "JSON File"),
    ("xml", "XML File"),
    ("csv", "CSV File"),
    ("md", "Markdown File"),
];

/// Type label for a file, derived from its extension alone.
///
/// Directories never reach this function; the scanner labels them
/// [`DIRECTORY`] directly.
#[must_use]
pub fn file_type(path: &Path) -> String {
    // `name.` yields Some("") here, which still counts as no extension
    let ext = match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_ascii_lowercase(),
        _ => return NO_EXTENSION.to_string(),
    };

    FILE_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map_or_else(
            || format!("{} File", ext.to_uppercase()),
            |(_, label)| (*label).to_string(),
        )
}
