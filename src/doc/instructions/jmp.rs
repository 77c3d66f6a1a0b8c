/*!
# `jmp <label>`

## Purpose
Continues at a label.

## Remarks
The current frame is kept. An unknown label is an `UNDEFINED LABEL`
error.

## Example
```text
label main
jmp skip
nop
label skip
ret

Running script...
```

*/
