mod common;

use common::{ArrayEntity, ComplexEntity, Keyword, ListEntity, SimpleEntity};
use typed_patch::{OperationKind, PatchDocument, PathErrorKind, PathSegment};

// ── add ───────────────────────────────────────────────────────────────────

#[test]
fn add_valid_path_operation_added() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.add("Foo", "bar").unwrap();

    assert_eq!(patch.operations().len(), 1);
    assert_eq!(patch.operations()[0].kind(), OperationKind::Add);
}

#[test]
fn add_invalid_path_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    let err = patch.add("FooMissing", "bar").unwrap_err();

    assert_eq!(err.path, "FooMissing");
    assert_eq!(err.source.kind, PathErrorKind::UnknownMember);
    assert!(patch.operations().is_empty());
}

// ── remove ────────────────────────────────────────────────────────────────

#[test]
fn remove_valid_path_operation_added() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.remove("Foo").unwrap();

    assert_eq!(patch.operations().len(), 1);
    assert_eq!(patch.operations()[0].kind(), OperationKind::Remove);
    assert!(patch.operations()[0].value().is_none());
}

#[test]
fn remove_invalid_path_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    assert!(patch.remove("FooMissing").is_err());
    assert!(!patch.has_operations());
}

// ── replace ───────────────────────────────────────────────────────────────

#[test]
fn replace_valid_path_operation_added() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.replace("Foo", "bar").unwrap();

    assert_eq!(patch.operations().len(), 1);
    assert_eq!(patch.operations()[0].kind(), OperationKind::Replace);
}

#[test]
fn replace_invalid_path_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    assert!(patch.replace("FooMissing", "bar").is_err());
    assert!(!patch.has_operations());
}

// ── move ──────────────────────────────────────────────────────────────────

#[test]
fn move_valid_paths_operation_added() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.move_value("Foo", "Baz").unwrap();

    let op = &patch.operations()[0];
    assert_eq!(op.kind(), OperationKind::Move);
    assert_eq!(op.from(), Some(&vec![PathSegment::property("Foo")]));
    assert_eq!(op.path(), &vec![PathSegment::property("Baz")]);
}

#[test]
fn move_array_indexes_operation_added() {
    let mut patch = PatchDocument::<ArrayEntity>::new();
    patch.move_value("Foo/5", "Foo/2").unwrap();

    assert_eq!(patch.operations().len(), 1);
    assert_eq!(patch.operations()[0].kind(), OperationKind::Move);
}

#[test]
fn move_invalid_from_path_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    let err = patch.move_value("FooMissing", "Baz").unwrap_err();
    assert_eq!(err.path, "FooMissing");
    assert!(patch.is_empty());
}

#[test]
fn move_invalid_destination_path_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    let err = patch.move_value("Foo", "BazMissing").unwrap_err();
    assert_eq!(err.path, "BazMissing");
    assert!(patch.is_empty());
}

#[test]
fn move_between_different_types_is_accepted() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    patch.move_value("/Norf/0", "/Bar/Foo").unwrap();
    assert_eq!(patch.len(), 1);
}

// ── path shape errors ─────────────────────────────────────────────────────

#[test]
fn index_on_record_is_rejected() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    let err = patch.remove("/Bar/0").unwrap_err();
    assert_eq!(err.source.kind, PathErrorKind::IndexOnRecord);
    assert_eq!(err.source.position, 1);
}

#[test]
fn property_on_sequence_is_rejected() {
    let mut patch = PatchDocument::<ListEntity>::new();
    let err = patch.remove("/Foo/last").unwrap_err();
    assert_eq!(err.source.kind, PathErrorKind::PropertyOnSequence);
}

#[test]
fn indexing_a_leaf_is_rejected() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    let errors = [
        patch.add("/Foo/0", "x").unwrap_err(),
        patch.remove("/Foo/0").unwrap_err(),
        patch.replace("/Foo/0", "x").unwrap_err(),
        patch.move_value("/Foo/0", "Baz").unwrap_err(),
        patch.move_value("Baz", "/Foo/0").unwrap_err(),
    ];

    for err in &errors {
        assert_eq!(err.path, "/Foo/0");
        assert_eq!(err.source.kind, PathErrorKind::SegmentOnLeaf);
        assert_eq!(err.source.position, 1);
    }
    assert!(!patch.has_operations());
}

#[test]
fn raw_identifier_fields_use_plain_names() {
    let mut patch = PatchDocument::<Keyword>::new();
    patch.add("type", "x").unwrap();

    let err = patch.add("r#type", "x").unwrap_err();
    assert_eq!(err.source.kind, PathErrorKind::UnknownMember);
    assert_eq!(patch.len(), 1);
}

#[test]
fn member_names_are_case_sensitive() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    assert!(patch.add("foo", "bar").is_err());
    assert!(patch.add("FOO", "bar").is_err());
    assert!(patch.add("/Foo", "bar").is_ok());
}

#[test]
fn skipped_fields_are_not_addressable() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    assert!(patch.replace("revision", 3).is_err());
}

#[test]
fn empty_components_are_rejected() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    assert!(patch.remove("").is_err());
    assert!(patch.remove("/").is_err());
    assert!(patch.remove("/Bar//Foo").is_err());
    assert!(patch.remove("/Bar/Foo/").is_err());
    assert!(patch.is_empty());
}

#[test]
fn deep_nested_path_is_accepted() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    patch.add("/Norf/0/Foo/1", "x").unwrap();
    assert_eq!(
        patch.operations()[0].path(),
        &vec![
            PathSegment::property("Norf"),
            PathSegment::Index(0),
            PathSegment::property("Foo"),
            PathSegment::Index(1),
        ]
    );
}

// ── has_operations ────────────────────────────────────────────────────────

#[test]
fn has_operations_false_by_default() {
    let patch = PatchDocument::<SimpleEntity>::new();
    assert!(!patch.has_operations());
}

#[test]
fn add_valid_path_sets_has_operations() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.add("Foo", "bar").unwrap();
    assert!(patch.has_operations());
}

#[test]
fn remove_valid_path_sets_has_operations() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.remove("Foo").unwrap();
    assert!(patch.has_operations());
}

#[test]
fn replace_valid_path_sets_has_operations() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.replace("Foo", "bar").unwrap();
    assert!(patch.has_operations());
}

#[test]
fn move_valid_paths_sets_has_operations() {
    let mut patch = PatchDocument::<SimpleEntity>::new();
    patch.move_value("Foo", "Baz").unwrap();
    assert!(patch.has_operations());
}

#[test]
fn operations_keep_insertion_order() {
    let mut patch = PatchDocument::<ComplexEntity>::new();
    patch
        .remove("/Norf/0/Foo/0")
        .unwrap()
        .add("/Bar/Baz", "b")
        .unwrap()
        .move_value("/Bar/Baz", "/Bar/Foo")
        .unwrap();
    let names: Vec<_> = (&patch).into_iter().map(|op| op.op_name()).collect();
    assert_eq!(names, vec!["remove", "add", "move"]);
}
