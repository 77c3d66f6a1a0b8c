/*!
# `cbz <variable> <label>`

## Purpose
Continues at a label when an integer variable is zero.

## Remarks
The variable must hold an integer, otherwise `TYPE MISMATCH`. The label
must exist even when the branch is not taken.

## Example
```text
label main
def n 0x2
def one 0x1
label loop
cbz n done
print n
sub n n one
jmp loop
label done
ret

Running script...
variable: 'n', value: 0x2
variable: 'n', value: 0x1
```

*/
