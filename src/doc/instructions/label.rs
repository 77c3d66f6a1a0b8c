/*!
# `label <name>`

## Purpose
Marks a place that `call`, `jmp` and `cbz` can go to.

## Remarks
Labels do nothing when executed. Names are case sensitive. When two
labels share a name, the first one wins. Execution begins at `label
main`.

## Example
```text
label main
jmp end
nop
label end
ret

Running script...
```

*/
