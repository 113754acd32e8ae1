//! Scratch workspace staging.
//!
//! The workspace is recreated from empty every run and owned by that run
//! alone. On failure it is left in place so the staged inputs can be
//! inspected.

use std::fs;
use std::path::Path;

use log::info;
use mdpub_core::prepare_document;

use crate::error::ExportError;

/// Stylesheet staged at the workspace root and referenced by the converter.
pub const STYLESHEET_NAME: &str = "epub-fixes.css";

/// Spacing fixes for readers that mishandle the converter's highlight
/// markup (spans promoted to blocks, inflated line height).
const STYLESHEET: &str = "\
code.sourceCode > span { display: inline !important; }
pre > code.sourceCode > span { display: inline !important; }
pre { line-height: 1.2 !important; margin: 0 !important; }
pre code { display: block; padding: 0; margin: 0; }
pre, code { font-variant-ligatures: none; }
pre > code.sourceCode { white-space: pre; }
";

/// Recreate `workspace` from empty, then stage every entry of `files` from
/// `docs_dir`: read, transform, and write at the mirrored relative path.
/// Finishes by writing the generated stylesheet at the workspace root.
///
/// A missing or unreadable source is fatal: the converter consumes the whole
/// ordered set at once, so no partial staging is useful.
pub fn stage(docs_dir: &Path, workspace: &Path, files: &[String]) -> Result<(), ExportError> {
    recreate_dir(workspace)?;

    for rel in files {
        let src = docs_dir.join(rel);
        let dst = workspace.join(rel);

        let raw = fs::read_to_string(&src).map_err(|source| ExportError::SourceRead {
            path: src.clone(),
            source,
        })?;

        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Workspace {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&dst, prepare_document(&raw)).map_err(|source| ExportError::Workspace {
            path: dst.clone(),
            source,
        })?;
        info!("staged {rel}");
    }

    let css = workspace.join(STYLESHEET_NAME);
    fs::write(&css, STYLESHEET).map_err(|source| ExportError::Workspace { path: css, source })?;
    Ok(())
}

fn recreate_dir(path: &Path) -> Result<(), ExportError> {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ExportError::Workspace {
                path: path.to_path_buf(),
                source,
            });
        }
    }
    fs::create_dir_all(path).map_err(|source| ExportError::Workspace {
        path: path.to_path_buf(),
        source,
    })
}
