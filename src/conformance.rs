//! Conformance script for [`OrderedList`] implementations
//!
//! The script walks front, middle, back, empty and not-found paths in one pass.
//! Later expectations depend on the values earlier steps leave behind, so the
//! steps must run in order against a list that starts empty.

use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

use crate::list::{ArrayList, LinkedList, ListError, ListKind, OrderedList, RingList};

/// One scripted operation, with its expected result where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Append(i32),
    Prepend(i32),
    /// `InsertAt(item, idx)`
    InsertAt(i32, usize),
    /// `Get(idx, expected)`
    Get(usize, Option<i32>),
    /// `RemoveAt(idx, expected)`
    RemoveAt(usize, Option<i32>),
    /// `Remove(item, expected)`
    Remove(i32, Option<i32>),
    Len(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Append(v) => write!(f, "append({v})"),
            Step::Prepend(v) => write!(f, "prepend({v})"),
            Step::InsertAt(v, i) => write!(f, "insert_at({v}, {i})"),
            Step::Get(i, _) => write!(f, "get({i})"),
            Step::RemoveAt(i, _) => write!(f, "remove_at({i})"),
            Step::Remove(v, _) => write!(f, "remove({v})"),
            Step::Len(_) => write!(f, "len()"),
        }
    }
}

pub const SCRIPT: &[Step] = &[
    // append
    Step::Append(5),
    Step::Append(7),
    Step::Append(9),
    Step::Get(2, Some(9)),
    Step::RemoveAt(1, Some(7)),
    Step::Len(2),
    // remove
    Step::Append(11),
    Step::RemoveAt(1, Some(9)),
    Step::Remove(9, None),
    Step::RemoveAt(0, Some(5)),
    Step::RemoveAt(0, Some(11)),
    Step::Len(0),
    // prepend
    Step::Prepend(5),
    Step::Prepend(7),
    Step::Prepend(9),
    Step::Get(2, Some(5)),
    Step::Get(0, Some(9)),
    Step::Remove(9, Some(9)),
    Step::Len(2),
    Step::Get(0, Some(7)),
    // insert
    Step::InsertAt(10, 1),
    Step::Get(1, Some(10)),
    Step::Get(2, Some(5)),
    Step::InsertAt(20, 2),
    Step::Get(2, Some(20)),
    Step::Get(3, Some(5)),
    Step::InsertAt(30, 4),
    Step::Get(4, Some(30)),
    Step::Get(3, Some(5)),
];

/// Observed or expected outcome of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Value(Option<i32>),
    Len(usize),
    Inserted(Result<(), ListError>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(Some(v)) => write!(f, "({v}, found)"),
            Outcome::Value(None) => write!(f, "(not found)"),
            Outcome::Len(n) => write!(f, "length {n}"),
            Outcome::Inserted(Ok(())) => write!(f, "(inserted)"),
            Outcome::Inserted(Err(e)) => write!(f, "(rejected: {e})"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    #[error("list must start empty, has {len} elements")]
    NotEmpty { len: usize },

    #[error("step {step}: {op} returned {actual}, expected {expected}")]
    Mismatch {
        step: usize,
        op: Step,
        expected: Outcome,
        actual: Outcome,
    },
}

/// Summary of a passing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub steps: usize,
    /// Contents left behind by the script, in index order.
    pub contents: Vec<i32>,
}

/// Run [`SCRIPT`] against `list`, stopping at the first mismatch.
#[instrument(level = "debug", skip(list))]
pub fn run<L: OrderedList<i32> + ?Sized>(list: &mut L) -> Result<Report, ConformanceError> {
    if !list.is_empty() {
        return Err(ConformanceError::NotEmpty { len: list.len() });
    }

    for (step, op) in SCRIPT.iter().enumerate() {
        trace!("step {}: {}", step, op);
        let checked = match *op {
            Step::Append(v) => {
                list.append(v);
                None
            }
            Step::Prepend(v) => {
                list.prepend(v);
                None
            }
            Step::InsertAt(v, idx) => Some((
                Outcome::Inserted(Ok(())),
                Outcome::Inserted(list.try_insert_at(v, idx)),
            )),
            Step::Get(idx, expected) => Some((
                Outcome::Value(expected),
                Outcome::Value(list.get(idx).copied()),
            )),
            Step::RemoveAt(idx, expected) => Some((
                Outcome::Value(expected),
                Outcome::Value(list.remove_at(idx)),
            )),
            Step::Remove(v, expected) => Some((
                Outcome::Value(expected),
                Outcome::Value(list.remove(&v)),
            )),
            Step::Len(expected) => Some((Outcome::Len(expected), Outcome::Len(list.len()))),
        };

        if let Some((expected, actual)) = checked {
            if expected != actual {
                warn!("step {}: {} mismatch: {} != {}", step, op, actual, expected);
                return Err(ConformanceError::Mismatch {
                    step,
                    op: *op,
                    expected,
                    actual,
                });
            }
        }
    }

    let report = Report {
        steps: SCRIPT.len(),
        contents: list.to_vec(),
    };
    debug!("conformance passed: {:?}", report);
    Ok(report)
}

/// Build a fresh list of `kind` and run the script against it.
pub fn run_kind(kind: ListKind) -> Result<Report, ConformanceError> {
    match kind {
        ListKind::Array => run(&mut ArrayList::<i32>::new()),
        ListKind::Linked => run(&mut LinkedList::<i32>::new()),
        ListKind::Ring => run(&mut RingList::<i32>::new()),
    }
}

/// Test helper: run the script and panic on the first mismatch.
#[track_caller]
pub fn assert_conforms<L: OrderedList<i32> + ?Sized>(list: &mut L) {
    if let Err(e) = run(list) {
        panic!("list does not conform: {e}");
    }
}
