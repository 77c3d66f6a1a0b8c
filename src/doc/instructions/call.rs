/*!
# `call <label>`

## Purpose
Runs the instructions at a label in a fresh frame.

## Remarks
The callee sees none of the caller's variables. When it executes `ret`,
the caller continues after the `call` with its variables unchanged.
Registers are the way to pass values. Calls may nest 1024 deep unless
`--max-depth` says otherwise; one more fails with `CALL STACK OVERFLOW`.
An unknown label is an `UNDEFINED LABEL` error.

## Example
```text
label main
call hello
ret
label hello
nop
ret

Running script...
NOP
```

*/
