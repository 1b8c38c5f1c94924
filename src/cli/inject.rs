//! `inject` command: patch head tags into HTML files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::brand::BrandProfile;
use crate::pipeline::head::DocumentSink;
use crate::seo::{MetadataConfig, MetadataInjector};
use crate::{debug, log};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Updated,
    Unchanged,
}

/// Patch every file in `files`, stopping at the first failure.
pub fn inject_files(
    files: &[PathBuf],
    brand: &BrandProfile,
    meta: &MetadataConfig,
    dry: bool,
) -> Result<()> {
    let injector = MetadataInjector::new(brand);

    if dry {
        let mut out = io::stdout().lock();
        for path in files {
            let html = patch(&injector, path, meta)?;
            out.write_all(html.as_bytes())?;
        }
        return Ok(());
    }

    let mut updated = 0;
    for path in files {
        match inject_file(&injector, path, meta)? {
            InjectOutcome::Updated => {
                updated += 1;
                debug!("inject"; "updated {}", path.display());
            }
            InjectOutcome::Unchanged => debug!("inject"; "unchanged {}", path.display()),
        }
    }

    log!("inject"; "{} of {} file{} updated ({})",
        updated, files.len(), if files.len() == 1 { "" } else { "s" }, brand.id);
    Ok(())
}

/// Patch one file in place. The file is only written when its content changes.
pub fn inject_file(
    injector: &MetadataInjector<'_>,
    path: &Path,
    meta: &MetadataConfig,
) -> Result<InjectOutcome> {
    let current = read(path)?;
    let patched = patch_str(injector, &current, meta)
        .with_context(|| format!("failed to inject into {}", path.display()))?;

    if patched == current {
        return Ok(InjectOutcome::Unchanged);
    }

    fs::write(path, patched).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(InjectOutcome::Updated)
}

fn patch(injector: &MetadataInjector<'_>, path: &Path, meta: &MetadataConfig) -> Result<String> {
    let current = read(path)?;
    patch_str(injector, &current, meta)
        .with_context(|| format!("failed to inject into {}", path.display()))
}

fn patch_str(injector: &MetadataInjector<'_>, html: &str, meta: &MetadataConfig) -> Result<String> {
    let mut sink = DocumentSink::new(html, &injector.brand().lang);
    injector.render(meta, &mut sink)?;
    Ok(sink.into_html())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{BENGALE_ID, builtin_profiles, find_profile};
    use crate::pipeline::head::BLOCK_BEGIN;
    use tempfile::TempDir;

    const PAGE: &str = "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n</head>\n<body></body>\n</html>\n";

    fn bengale() -> BrandProfile {
        find_profile(&builtin_profiles(), BENGALE_ID).unwrap().clone()
    }

    #[test]
    fn test_inject_file_then_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        let brand = bengale();
        let injector = MetadataInjector::new(&brand);
        let meta = MetadataConfig::default();

        assert_eq!(
            inject_file(&injector, &path, &meta).unwrap(),
            InjectOutcome::Updated
        );
        let patched = fs::read_to_string(&path).unwrap();
        assert!(patched.contains("<html lang=\"fr\">"));
        assert!(patched.contains(BLOCK_BEGIN));
        assert!(patched.contains("<title>La Porte du Bengale</title>"));
        assert!(patched.contains(r#"<script type="application/ld+json">{"@context":"https://schema.org""#));

        assert_eq!(
            inject_file(&injector, &path, &meta).unwrap(),
            InjectOutcome::Unchanged
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), patched);
    }

    #[test]
    fn test_inject_override_rewrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commander.html");
        fs::write(&path, PAGE).unwrap();

        let brand = bengale();
        let injector = MetadataInjector::new(&brand);
        inject_file(&injector, &path, &MetadataConfig::default()).unwrap();

        let meta = MetadataConfig {
            title: Some("Commander".into()),
            ..Default::default()
        };
        assert_eq!(
            inject_file(&injector, &path, &meta).unwrap(),
            InjectOutcome::Updated
        );
        let patched = fs::read_to_string(&path).unwrap();
        assert!(patched.contains("<title>Commander</title>"));
        assert_eq!(patched.matches("<title>").count(), 1);
    }

    #[test]
    fn test_inject_missing_head_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fragment.html");
        fs::write(&path, "<p>hi</p>").unwrap();

        let brand = bengale();
        let err = inject_file(&MetadataInjector::new(&brand), &path, &MetadataConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("</head>"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_inject_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let brand = bengale();
        let err = inject_file(
            &MetadataInjector::new(&brand),
            &dir.path().join("missing.html"),
            &MetadataConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_dry_run_leaves_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        inject_files(&[path.clone()], &bengale(), &MetadataConfig::default(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), PAGE);
    }
}
