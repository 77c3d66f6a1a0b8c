/*!
# `store <register> <variable>`

## Purpose
Copies an integer variable into a register.

## Remarks
Registers are shared by every frame and keep their values between
scripts.

## Example
```text
label main
def x 0x7
store $1 x
def y 0x0
load y $1
print y
ret

Running script...
variable: 'y', value: 0x7
```

*/
