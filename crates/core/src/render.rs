//! Rendering boundary: markdown source in, full HTML document out.
//!
//! The markup transformation itself is delegated to comrak; this module only
//! validates the source format and wraps the fragment in the host shell.

use comrak::Options;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Extension is not one of the recognized source formats.
    #[error("unsupported source format .{0}: must be .md or .markdown")]
    UnsupportedFormat(String),
}

/// Recognized source formats, parsed case-insensitively from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Md,
    Markdown,
}

impl SourceFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" => Some(Self::Md),
            "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Render markdown source into an HTML fragment.
///
/// Fails with [`RenderError::UnsupportedFormat`] when `extension` is not a
/// recognized source format.
pub fn render_html(content: &str, extension: &str) -> Result<String, RenderError> {
    if SourceFormat::from_extension(extension).is_none() {
        return Err(RenderError::UnsupportedFormat(extension.to_string()));
    }

    Ok(comrak::markdown_to_html(content, &default_options()))
}

/// Wrap a rendered fragment in the fixed host document shell.
///
/// The shell (meta tags, stylesheet, table styling) is presentation glue; it
/// can change without affecting cache correctness because the fingerprint is
/// derived from the source, not the output.
pub fn wrap_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="ie=edge">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.0.2/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-EVSTQN3/azprG1Anm3QDgpJLIm9Nao0Yz1ztcQTwFspd3yD65VohhpuuCOmLASjC" crossorigin="anonymous">
    <style>
        body {{ margin: 40px 0 0 40px; }}
        table thead tr {{ background-color: #777; color: #fff; }}
        table tr:nth-child(even) {{ background-color: #eee; }}
        table td, table th {{ padding: 5px 10px; border: 1px solid #777; }}
    </style>
</head>
<body>
    {body}
</body>
</html>
"#
    )
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.parse.smart = false;

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // Allow raw HTML passthrough

    options
}
