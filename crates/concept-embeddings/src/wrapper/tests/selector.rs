//! Selector validation tests: uniqueness, range, membership.

use candle_core::{Device, Tensor};

use crate::error::ConceptError;
use crate::wrapper::ConceptSelector;

use super::test_wrapper;

fn ids(values: &[u32]) -> Tensor {
    Tensor::new(values, &Device::Cpu).unwrap()
}

// =========================================================================
// UNIQUENESS
// =========================================================================

#[test]
fn test_duplicate_selector_rejected() {
    let wrapper = test_wrapper(100, 8, 2);
    let err = wrapper
        .forward(&ids(&[100, 101]), Some(&ConceptSelector::Many(vec![0, 0])))
        .unwrap_err();

    match err {
        ConceptError::DuplicateConceptIndex { index } => assert_eq!(index, 0),
        other => panic!("expected DuplicateConceptIndex, got {other:?}"),
    }
}

// =========================================================================
// RANGE
// =========================================================================

#[test]
fn test_selector_one_past_last_index_rejected() {
    let wrapper = test_wrapper(100, 8, 2);
    let err = wrapper
        .forward(&ids(&[100]), Some(&ConceptSelector::One(2)))
        .unwrap_err();

    match err {
        ConceptError::ConceptIndexOutOfRange {
            index,
            num_concepts,
        } => {
            assert_eq!(index, 2);
            assert_eq!(num_concepts, 2);
        }
        other => panic!("expected ConceptIndexOutOfRange, got {other:?}"),
    }
}

// =========================================================================
// MEMBERSHIP
// =========================================================================

#[test]
fn test_selected_concept_absent_from_ids_rejected() {
    // concept 1 (reserved id 101) never appears in the input
    let wrapper = test_wrapper(100, 8, 2);
    let err = wrapper
        .forward(&ids(&[100, 5]), Some(&ConceptSelector::Many(vec![0, 1])))
        .unwrap_err();

    match err {
        ConceptError::ConceptNotPresent { reserved_ids } => {
            assert_eq!(reserved_ids, vec![101]);
        }
        other => panic!("expected ConceptNotPresent, got {other:?}"),
    }
}

#[test]
fn test_membership_error_names_every_missing_id() {
    let wrapper = test_wrapper(100, 8, 3);
    let err = wrapper
        .forward(&ids(&[5, 6]), Some(&ConceptSelector::Many(vec![0, 2])))
        .unwrap_err();

    match err {
        ConceptError::ConceptNotPresent { reserved_ids } => {
            assert_eq!(reserved_ids, vec![100, 102]);
        }
        other => panic!("expected ConceptNotPresent, got {other:?}"),
    }
}

#[test]
fn test_membership_required_in_every_batch_row() {
    // present in row 0, absent in row 1: any-over-last-axis must hold for
    // all leading positions
    let wrapper = test_wrapper(100, 8, 1);
    let input = Tensor::new(&[[100u32, 5], [6, 7]], &Device::Cpu).unwrap();
    let err = wrapper
        .forward(&input, Some(&ConceptSelector::One(0)))
        .unwrap_err();

    match err {
        ConceptError::ConceptNotPresent { reserved_ids } => {
            assert_eq!(reserved_ids, vec![100]);
        }
        other => panic!("expected ConceptNotPresent, got {other:?}"),
    }
}

#[test]
fn test_no_membership_requirement_without_selector() {
    // omitted selector substitutes whatever reserved ids happen to appear
    let wrapper = test_wrapper(100, 8, 2);
    let out = wrapper.forward(&ids(&[5, 6, 7]), None).unwrap();

    assert_eq!(out.dims(), &[3, 8]);
}

// =========================================================================
// CONVERSIONS AND ORDER
// =========================================================================

#[test]
fn test_from_conversions() {
    assert_eq!(ConceptSelector::from(1), ConceptSelector::One(1));
    assert_eq!(
        ConceptSelector::from(vec![1, 0]),
        ConceptSelector::Many(vec![1, 0])
    );
    assert_eq!(
        ConceptSelector::from(&[2usize, 3][..]),
        ConceptSelector::Many(vec![2, 3])
    );
}

#[test]
fn test_indices_preserve_caller_order() {
    let selector = ConceptSelector::Many(vec![2, 0, 1]);
    assert_eq!(selector.indices(), &[2, 0, 1]);
}
