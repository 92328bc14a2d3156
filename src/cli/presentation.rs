//! Presentation: summary and manifest formatters for terminal output.

use crate::manifest::Manifest;
use crate::sfo::DiscSummary;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Two-line title/id summary, bolded for terminals.
pub fn format_summary_text(summary: &DiscSummary) -> String {
    format!(
        "Game Title: {}\nGame ID: {}",
        summary.title.bold(),
        summary.title_id.bold()
    )
}

/// Manifest body as a two-column table.
pub fn format_manifest_table(manifest: &Manifest) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["File Path", "SHA-1"]);
    for entry in &manifest.entries {
        table.add_row(vec![
            entry.path.display().to_string(),
            entry.digest.to_string(),
        ]);
    }
    table.to_string()
}

/// Full text rendering of one scan: summary, table, cancellation note.
pub fn format_scan_text(summary: &DiscSummary, manifest: &Manifest) -> String {
    let mut out = format!(
        "{}\n\n{}",
        format_summary_text(summary),
        format_manifest_table(manifest)
    );
    if manifest.cancelled {
        out.push_str(&format!(
            "\nCancelled after {} of the discovered files.",
            manifest.len()
        ));
    }
    out
}

/// JSON rendering of one scan.
pub fn format_scan_json(
    summary: &DiscSummary,
    manifest: &Manifest,
) -> Result<String, serde_json::Error> {
    let out = json!({
        "title": summary.title,
        "title_id": summary.title_id,
        "cancelled": manifest.cancelled,
        "entries": manifest.entries,
    });
    serde_json::to_string_pretty(&out)
}

/// JSON rendering of the summary alone.
pub fn format_summary_json(summary: &DiscSummary) -> Result<String, serde_json::Error> {
    let out = json!({
        "title": summary.title,
        "title_id": summary.title_id,
    });
    serde_json::to_string_pretty(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{EntryDigest, ManifestEntry};
    use std::path::PathBuf;

    fn sample() -> (DiscSummary, Manifest) {
        let summary = DiscSummary {
            title: "Example Game".into(),
            title_id: "BLUS00000".into(),
        };
        let manifest = Manifest {
            entries: vec![
                ManifestEntry {
                    path: PathBuf::from("a.bin"),
                    digest: EntryDigest::Sha1(
                        "da23614e02469a0d7c7bd1bdab5c9c474b1904dc".into(),
                    ),
                },
                ManifestEntry {
                    path: PathBuf::from("b.bin"),
                    digest: EntryDigest::Error("permission denied".into()),
                },
            ],
            cancelled: false,
        };
        (summary, manifest)
    }

    #[test]
    fn test_table_contains_paths_and_digests() {
        let (_, manifest) = sample();
        let table = format_manifest_table(&manifest);
        assert!(table.contains("File Path"));
        assert!(table.contains("a.bin"));
        assert!(table.contains("da23614e02469a0d7c7bd1bdab5c9c474b1904dc"));
        assert!(table.contains("ERROR"));
    }

    #[test]
    fn test_scan_json_shape() {
        let (summary, manifest) = sample();
        let text = format_scan_json(&summary, &manifest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["title"], "Example Game");
        assert_eq!(value["title_id"], "BLUS00000");
        assert_eq!(value["cancelled"], false);
        assert_eq!(value["entries"][0]["path"], "a.bin");
        assert_eq!(
            value["entries"][0]["sha1"],
            "da23614e02469a0d7c7bd1bdab5c9c474b1904dc"
        );
        assert_eq!(value["entries"][1]["error"], "permission denied");
    }

    #[test]
    fn test_cancelled_note_in_text() {
        let (summary, mut manifest) = sample();
        manifest.cancelled = true;
        let text = format_scan_text(&summary, &manifest);
        assert!(text.contains("Cancelled after 2"));
    }
}
