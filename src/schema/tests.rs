use super::*;
use crate::record::Header;

fn header(names: &[&str]) -> Header {
    Header::new(names.iter().copied()).unwrap()
}

#[test]
fn test_appends_new_columns() {
    let original = header(&["Chr", "Pos", "Ref"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());

    assert_eq!(merged.names(), &["Chr", "Pos", "Ref", "Effect"]);
}

#[test]
fn test_existing_column_is_overwrite_target() {
    let original = header(&["Chr", "Pos", "Effect"]);
    let summary = reconcile_with_summary(&original, &["Effect"], &ReconcilePolicy::default());

    assert_eq!(summary.merged, original);
    assert!(summary.appended.is_empty());
    assert_eq!(summary.overwritten, vec!["Effect".to_string()]);
}

#[test]
fn test_sort_only_affects_appended_segment() {
    let original = header(&["Zulu", "Chr"]);
    let policy = ReconcilePolicy::new(true, false);
    let merged = reconcile(&original, &["Zeta", "Alpha", "Chr"], &policy);

    assert_eq!(merged.names(), &["Zulu", "Chr", "Alpha", "Zeta"]);
}

#[test]
fn test_unsorted_keeps_first_observed_order() {
    let original = header(&["Chr"]);
    let merged = reconcile(
        &original,
        &["Zeta", "Alpha", "Zeta", "Mid"],
        &ReconcilePolicy::default(),
    );

    assert_eq!(merged.names(), &["Chr", "Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_empty_annotation_columns() {
    let original = header(&["Chr", "Pos"]);
    let none: [&str; 0] = [];

    assert_eq!(reconcile(&original, &none, &ReconcilePolicy::new(true, true)), original);
}

#[test]
fn test_empty_original_header() {
    let original = Header::default();
    let merged = reconcile(&original, &["Zeta", "Alpha"], &ReconcilePolicy::new(true, false));

    assert_eq!(merged.names(), &["Alpha", "Zeta"]);
}

#[test]
fn test_case_sensitive_names_are_distinct() {
    let original = header(&["effect"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());

    assert_eq!(merged.names(), &["effect", "Effect"]);
}

#[test]
fn test_add_missing_cols_appends_canonical_columns() {
    let original = header(&["Chromosome", "Hugo_Symbol"]);
    let policy = ReconcilePolicy::new(false, true).with_canonical_columns([
        "Hugo_Symbol",
        "Variant_Classification",
        "HGVSp_Short",
    ]);
    let summary = reconcile_with_summary(&original, &["HGVSp_Short", "Transcript_ID"], &policy);

    assert_eq!(
        summary.merged.names(),
        &[
            "Chromosome",
            "Hugo_Symbol",
            "HGVSp_Short",
            "Transcript_ID",
            "Variant_Classification"
        ]
    );
    assert_eq!(summary.appended.len(), 3);
}

#[test]
fn test_canonical_columns_ignored_without_flag() {
    let original = header(&["Chromosome"]);
    let policy = ReconcilePolicy::new(false, false).with_canonical_columns(["Hugo_Symbol"]);
    let merged = reconcile(&original, &["Effect"], &policy);

    assert_eq!(merged.names(), &["Chromosome", "Effect"]);
}

#[test]
fn test_add_missing_cols_without_canonical_list_is_noop() {
    let original = header(&["Chr"]);
    let with_flag = reconcile(&original, &["B", "A"], &ReconcilePolicy::new(false, true));
    let without_flag = reconcile(&original, &["B", "A"], &ReconcilePolicy::new(false, false));

    assert_eq!(with_flag, without_flag);
}

#[test]
fn test_sorted_canonical_and_annotation_columns_interleave() {
    let original = header(&["Chr"]);
    let policy = ReconcilePolicy::new(true, true).with_canonical_columns(["Mid"]);
    let merged = reconcile(&original, &["Zeta", "Alpha"], &policy);

    assert_eq!(merged.names(), &["Chr", "Alpha", "Mid", "Zeta"]);
}
