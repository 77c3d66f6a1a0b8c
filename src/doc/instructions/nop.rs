/*!
# `nop`

## Purpose
Prints `NOP`.

## Remarks
Takes no operands. Useful as a trace of which path a script took.

## Example
```text
label main
nop
ret

Running script...
NOP
```

*/
