/*!
# `load <variable> <register>`

## Purpose
Copies a register into an integer variable.

## Remarks
The variable must already exist and hold an integer. Registers are `$0`
through `$9`; anything else is an `ILLEGAL REGISTER` error.

## Example
```text
label main
def x 0x0
load x $5
print x
ret

Running script...
variable: 'x', value: 0x0
```

*/
