mod common;
use common::*;

#[test]
fn test_print_integer() {
    let out = script(&["label main", "def x 0x2a", "print x", "ret"]);
    assert_eq!(out, "variable: 'x', value: 0x2a\n");
}

#[test]
fn test_print_string() {
    let out = script(&["label main", r#"def s "hi""#, "print s", "ret"]);
    assert_eq!(out, "variable: 's', value: \"hi\"\n");
}

#[test]
fn test_print_negative_integer_as_hex() {
    let out = script(&["label main", "def x 0xffffffffffffffff", "print x", "ret"]);
    assert_eq!(out, "variable: 'x', value: 0xffffffffffffffff\n");
}

#[test]
fn test_print_undefined() {
    let out = script(&["label main", "print x", "ret"]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 1; x\n");
}

#[test]
fn test_nop() {
    let out = script(&["label main", "nop", "NOP", "ret"]);
    assert_eq!(out, "NOP\nNOP\n");
}

#[test]
fn test_add_integers() {
    let out = script(&[
        "label main",
        "def a 0x5",
        "def b 0x3",
        "add c a b",
        "print c",
        "ret",
    ]);
    assert_eq!(out, "variable: 'c', value: 0x8\n");
}

#[test]
fn test_add_wraps() {
    let out = script(&[
        "label main",
        "def a 0x7fffffffffffffff",
        "def b 0x1",
        "add a a b",
        "print a",
        "ret",
    ]);
    assert_eq!(out, "variable: 'a', value: 0x8000000000000000\n");
}

#[test]
fn test_add_strings() {
    let out = script(&[
        "label main",
        r#"def a "foo""#,
        r#"def b "bar""#,
        "add c a b",
        "print c",
        "ret",
    ]);
    assert_eq!(out, "variable: 'c', value: \"foobar\"\n");
}

#[test]
fn test_add_overwrites_destination_type() {
    let out = script(&[
        "label main",
        r#"def a "foo""#,
        r#"def b "bar""#,
        "def c 0x1",
        "add c a b",
        "print c",
        "ret",
    ]);
    assert_eq!(out, "variable: 'c', value: \"foobar\"\n");
}

#[test]
fn test_add_string_overflow_fails() {
    let a = format!("def a \"{}\"", "a".repeat(40));
    let b = format!("def b \"{}\"", "b".repeat(24));
    let out = script(&["label main", &a, &b, "add c a b", "print c", "ret"]);
    assert_eq!(out, "STRING TOO LONG IN 3; MAXIMUM STRING LENGTH IS 63\n");
    let b = format!("def b \"{}\"", "b".repeat(23));
    let out = script(&["label main", &a, &b, "add a a b", "ret"]);
    assert_eq!(out, "");
}

#[test]
fn test_add_mismatched_types() {
    let out = script(&[
        "label main",
        "def a 0x1",
        r#"def b "b""#,
        "add c a b",
        "ret",
    ]);
    assert_eq!(out, "TYPE MISMATCH IN 3; INTEGER AND STRING\n");
}

#[test]
fn test_add_missing_operand() {
    let out = script(&["label main", "def a 0x1", "add c a b", "ret"]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 2; b\n");
}

#[test]
fn test_sub_integers() {
    let out = script(&[
        "label main",
        "def a 0x3",
        "def b 0x5",
        "sub c a b",
        "print c",
        "ret",
    ]);
    assert_eq!(out, "variable: 'c', value: 0xfffffffffffffffe\n");
}

#[test]
fn test_sub_string_suffix() {
    let out = script(&[
        "label main",
        r#"def a "hello""#,
        r#"def b "lo""#,
        "sub c a b",
        "print c",
        r#"def x "xyz""#,
        "sub d a x",
        "print d",
        "ret",
    ]);
    assert_eq!(
        out,
        "variable: 'c', value: \"hel\"\nvariable: 'd', value: \"hello\"\n"
    );
}

#[test]
fn test_mov() {
    let out = script(&[
        "label main",
        r#"def s "text""#,
        "def n 0x1",
        "mov n s",
        "print n",
        "print s",
        "ret",
    ]);
    assert_eq!(
        out,
        "variable: 'n', value: \"text\"\nvariable: 's', value: \"text\"\n"
    );
}

#[test]
fn test_mov_requires_destination() {
    let out = script(&["label main", "def s 0x1", "mov n s", "ret"]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 2; n\n");
    let out = script(&["label main", "def n 0x1", "mov n s", "ret"]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 2; s\n");
}

#[test]
fn test_cbz_taken() {
    let out = script(&[
        "label main",
        "def z 0x0",
        "cbz z skip",
        "nop",
        "label skip",
        "print z",
        "ret",
    ]);
    assert_eq!(out, "variable: 'z', value: 0x0\n");
}

#[test]
fn test_cbz_not_taken() {
    let out = script(&[
        "label main",
        "def z 0x1",
        "cbz z skip",
        "nop",
        "label skip",
        "print z",
        "ret",
    ]);
    assert_eq!(out, "NOP\nvariable: 'z', value: 0x1\n");
}

#[test]
fn test_cbz_checks() {
    let out = script(&["label main", r#"def s "x""#, "cbz s main", "ret"]);
    assert_eq!(out, "TYPE MISMATCH IN 2; s IS STRING\n");
    let out = script(&["label main", "def n 0x1", "cbz n nowhere", "ret"]);
    assert_eq!(out, "UNDEFINED LABEL IN 2; nowhere\n");
    let out = script(&["label main", "cbz n main", "ret"]);
    assert_eq!(out, "UNDEFINED VARIABLE IN 1; n\n");
}

#[test]
fn test_countdown_loop() {
    let out = script(&[
        "label main",
        "def n 0x3",
        "def one 0x1",
        "label loop",
        "cbz n done",
        "print n",
        "sub n n one",
        "jmp loop",
        "label done",
        "ret",
    ]);
    assert_eq!(
        out,
        "variable: 'n', value: 0x3\nvariable: 'n', value: 0x2\nvariable: 'n', value: 0x1\n"
    );
}

#[test]
fn test_jmp_undefined() {
    let out = script(&["label main", "jmp nowhere", "ret"]);
    assert_eq!(out, "UNDEFINED LABEL IN 1; nowhere\n");
}

#[test]
fn test_label_is_case_sensitive() {
    let out = script(&["label main", "jmp Skip", "label skip", "ret"]);
    assert_eq!(out, "UNDEFINED LABEL IN 1; Skip\n");
}

#[test]
fn test_def_errors() {
    let out = script(&["label main", "def x 0x1", "def x 0x2", "ret"]);
    assert_eq!(out, "DUPLICATE DEFINITION IN 2; x\n");
    let out = script(&["label main", "def x 42", "ret"]);
    assert_eq!(out, "ILLEGAL LITERAL IN 1; 42\n");
    let out = script(&["label main", "def abcdefghijklmnop 0x1", "ret"]);
    assert_eq!(out, "NAME TOO LONG IN 1; abcdefghijklmnop\n");
}

#[test]
fn test_def_truncates_long_literal() {
    let def = format!("def s \"{}\"", "x".repeat(70));
    let out = script(&["label main", &def, "print s", "ret"]);
    assert_eq!(out, format!("variable: 's', value: \"{}\"\n", "x".repeat(63)));
}

#[test]
fn test_frame_holds_32_variables() {
    let defs: Vec<String> = (0..33).map(|i| format!("def v{} 0x{:x}", i, i)).collect();
    let mut lines = vec!["label main"];
    lines.extend(defs.iter().map(|s| s.as_str()));
    lines.push("ret");
    assert_eq!(script(&lines), "TOO MANY VARIABLES IN 33\n");
    lines.remove(33);
    assert_eq!(script(&lines), "");
}

#[test]
fn test_ran_off_the_end() {
    let out = script(&["label main", "nop"]);
    assert_eq!(out, "NOP\nEND OF SCRIPT IN 2\n");
}

#[test]
fn test_output_before_error_stands() {
    let out = script(&["label main", "def x 0x1", "print x", "print y", "ret"]);
    assert_eq!(
        out,
        "variable: 'x', value: 0x1\nUNDEFINED VARIABLE IN 3; y\n"
    );
}
