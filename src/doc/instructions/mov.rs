/*!
# `mov <dest> <src>`

## Purpose
Copies one variable into another.

## Remarks
Both variables must already exist. The destination takes the source's
type.

## Example
```text
label main
def a "text"
def b 0x0
mov b a
print b
ret

Running script...
variable: 'b', value: "text"
```

*/
