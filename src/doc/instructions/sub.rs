/*!
# `sub <dest> <a> <b>`

## Purpose
Subtracts two integers or removes a string suffix.

## Remarks
Both operands must have the same type. Integer subtraction wraps around.
For strings, when `a` ends with `b` that ending is removed; otherwise
`a` is copied unchanged. The destination is created when it does not
exist yet.

## Example
```text
label main
def a "hello"
def b "lo"
sub c a b
print c
ret

Running script...
variable: 'c', value: "hel"
```

*/
