/*!
# `add <dest> <a> <b>`

## Purpose
Adds two integers or joins two strings.

## Remarks
Both operands must have the same type, otherwise `TYPE MISMATCH`.
Integer addition wraps around. A joined string longer than 63 bytes is a
`STRING TOO LONG` error. The destination is created when it does not
exist yet and is overwritten when it does.

## Example
```text
label main
def a "foo"
def b "bar"
add c a b
print c
ret

Running script...
variable: 'c', value: "foobar"
```

*/
