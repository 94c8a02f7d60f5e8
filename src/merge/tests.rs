use super::*;
use crate::annotation::AnnotationMap;
use crate::record::{Header, Record, RecordError};
use crate::schema::{reconcile, ReconcilePolicy};

fn header(names: &[&str]) -> Header {
    Header::new(names.iter().copied()).unwrap()
}

fn annotations(pairs: &[(&str, &str)]) -> AnnotationMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_new_annotation_column_is_appended() {
    let original = header(&["Chr", "Pos", "Ref"]);
    let map = annotations(&[("Effect", "missense")]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());

    let row = merge_row(&["1", "100", "A"], &map, &original, &merged).unwrap();
    assert_eq!(row, vec!["1", "100", "A", "missense"]);
}

#[test]
fn test_annotation_overwrites_existing_column() {
    let original = header(&["Chr", "Pos", "Effect"]);
    let map = annotations(&[("Effect", "missense")]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());

    let row = merge_row(&["1", "100", "old"], &map, &original, &merged).unwrap();
    assert_eq!(merged, original);
    assert_eq!(row, vec!["1", "100", "missense"]);
}

#[test]
fn test_missing_annotation_falls_back_to_empty() {
    let original = header(&["Chr"]);
    let merged = reconcile(&original, &["Alpha", "Zeta"], &ReconcilePolicy::default());
    let map = annotations(&[("Zeta", "z")]);

    let row = merge_row(&["1"], &map, &original, &merged).unwrap();
    assert_eq!(row, vec!["1", "", "z"]);
}

#[test]
fn test_original_value_kept_when_not_annotated() {
    let original = header(&["Chr", "Effect"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());

    let row = merge_row(&["1", "old"], &AnnotationMap::new(), &original, &merged).unwrap();
    assert_eq!(row, vec!["1", "old"]);
}

#[test]
fn test_keys_outside_merged_header_are_ignored() {
    let original = header(&["Chr"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());
    let plan = MergePlan::new(&original, &merged);
    let map = annotations(&[("Effect", "stop_gained"), ("Unlisted", "x")]);

    let row = plan.merge_fields(&["1"], Some(&map), 2).unwrap();
    assert_eq!(row.fields, vec!["1", "stop_gained"]);
    assert_eq!(row.ignored_keys, 1);
}

#[test]
fn test_no_annotations_behaves_like_empty_map() {
    let original = header(&["Chr", "Effect"]);
    let merged = reconcile(&original, &["Effect", "Gene"], &ReconcilePolicy::default());
    let plan = MergePlan::new(&original, &merged);

    let row = plan.merge_fields(&["X", "old"], None, 3).unwrap();
    assert_eq!(row.fields, vec!["X", "old", ""]);
}

#[test]
fn test_plan_sources() {
    let original = header(&["Chr", "Pos"]);
    let merged = reconcile(&original, &["Pos", "Gene"], &ReconcilePolicy::default());
    let plan = MergePlan::new(&original, &merged);

    assert_eq!(
        plan.sources(),
        &[
            ColumnSource::Original(0),
            ColumnSource::Original(1),
            ColumnSource::Added
        ]
    );
}

#[test]
fn test_merge_from_record() {
    let original = header(&["Chr", "Pos"]);
    let merged = reconcile(&original, &["Gene"], &ReconcilePolicy::default());
    let plan = MergePlan::new(&original, &merged);
    let record = Record::parse(&original, "17\t7579472", 4).unwrap();
    let map = annotations(&[("Gene", "TP53")]);

    let row = plan.merge(&record, Some(&map)).unwrap();
    assert_eq!(row.fields, vec!["17", "7579472", "TP53"]);
}

#[test]
fn test_raw_row_length_mismatch() {
    let original = header(&["Chr", "Pos", "Ref"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());
    let plan = MergePlan::new(&original, &merged);

    let err = plan.merge_fields(&["1", "100"], None, 9).unwrap_err();
    assert_eq!(
        err,
        RecordError::MalformedRow {
            line: 9,
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn test_merge_row_length_mismatch_has_no_line() {
    let original = header(&["Chr", "Pos"]);
    let merged = reconcile(&original, &["Effect"], &ReconcilePolicy::default());
    let map = annotations(&[("Effect", "missense")]);

    let err = merge_row(&["1", "100", "extra"], &map, &original, &merged).unwrap_err();
    assert_eq!(
        err,
        RecordError::MalformedRow {
            line: 0,
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn test_merge_does_not_touch_inputs() {
    let original = header(&["Chr"]);
    let merged = reconcile(&original, &["Chr", "Gene"], &ReconcilePolicy::default());
    let raw = vec!["1".to_string()];
    let map = annotations(&[("Chr", "chr1"), ("Gene", "KRAS")]);

    let row = merge_row(&raw[..], &map, &original, &merged).unwrap();
    assert_eq!(row, vec!["chr1", "KRAS"]);
    assert_eq!(raw, vec!["1".to_string()]);
    assert_eq!(map.len(), 2);
}
