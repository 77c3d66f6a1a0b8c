/*!
# `print <variable>`

## Purpose
Shows a variable's name and value.

## Remarks
Integers are shown in hexadecimal, negative numbers as their 64-bit
two's complement. Strings are shown in double quotes.

## Example
```text
label main
def x 0x10
print x
ret

Running script...
variable: 'x', value: 0x10
```

*/
