mod common;
use common::*;

#[test]
fn test_call_and_return() {
    let out = script(&[
        "label main",
        "def x 0x1",
        "call f",
        "print x",
        "ret",
        "label f",
        "def x 0x2",
        "print x",
        "ret",
    ]);
    assert_eq!(
        out,
        "variable: 'x', value: 0x2\nvariable: 'x', value: 0x1\n"
    );
}

#[test]
fn test_callee_cannot_see_caller() {
    let out = script(&[
        "label main",
        "def x 0x1",
        "call f",
        "ret",
        "label f",
        "print x",
        "ret",
    ]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 5; x\nCALL FAILED IN 2; f\n");
}

#[test]
fn test_callee_definitions_are_dropped() {
    let out = script(&[
        "label main",
        "call f",
        "print y",
        "ret",
        "label f",
        "def y 0x9",
        "ret",
    ]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 2; y\n");
}

#[test]
fn test_registers_carry_results() {
    let out = script(&[
        "label main",
        "def r 0x0",
        "call f",
        "load r $3",
        "print r",
        "ret",
        "label f",
        "def v 0x2a",
        "store $3 v",
        "ret",
    ]);
    assert_eq!(out, "variable: 'r', value: 0x2a\n");
}

#[test]
fn test_call_undefined_label() {
    let out = script(&["label main", "call nowhere", "ret"]);
    assert_eq!(out, "UNDEFINED LABEL IN 1; nowhere\n");
}

#[test]
fn test_nested_failure_unwinds() {
    let out = script(&[
        "label main",
        "call a",
        "ret",
        "label a",
        "call b",
        "ret",
        "label b",
        "print q",
        "ret",
    ]);
    assert_eq!(
        out,
        "UNDEFINED VARIABLE IN 7; q\nCALL FAILED IN 4; b\nCALL FAILED IN 1; a\n"
    );
}

#[test]
fn test_callee_runs_off_the_end() {
    let out = script(&["label main", "call f", "ret", "label f", "nop"]);
    assert_eq!(out, "NOP\nEND OF SCRIPT IN 5\nCALL FAILED IN 1; f\n");
}

#[test]
fn test_missing_entry_label() {
    let out = script(&["label start", "ret"]);
    assert_eq!(out, "UNDEFINED LABEL; main\n");
}

#[test]
fn test_first_label_wins() {
    let out = script(&[
        "label main",
        "call f",
        "ret",
        "label f",
        "nop",
        "ret",
        "label f",
        "def x 0x1",
        "print x",
        "ret",
    ]);
    assert_eq!(out, "NOP\n");
}

#[test]
fn test_falls_through_labels() {
    let out = script(&[
        "label main",
        "def x 0x1",
        "label next",
        "print x",
        "ret",
    ]);
    assert_eq!(out, "variable: 'x', value: 0x1\n");
}

#[test]
fn test_recursion_with_registers() {
    // sums 3 + 2 + 1 into $0
    let out = script(&[
        "label main",
        "def n 0x3",
        "store $1 n",
        "def zero 0x0",
        "store $0 zero",
        "call sum",
        "def total 0x0",
        "load total $0",
        "print total",
        "ret",
        "label sum",
        "def n 0x0",
        "load n $1",
        "cbz n done",
        "def acc 0x0",
        "load acc $0",
        "add acc acc n",
        "store $0 acc",
        "def one 0x1",
        "sub n n one",
        "store $1 n",
        "call sum",
        "label done",
        "ret",
    ]);
    assert_eq!(out, "variable: 'total', value: 0x6\n");
}
