/*!
# `def <variable> <literal>`

## Purpose
Creates a variable in the current frame.

## Remarks
Integer literals are `0x` followed by hexadecimal digits; reading stops
at the first character that is not a hex digit. Values above 64 bits
saturate. String literals are wrapped in double quotes and keep at most
63 bytes; the rest is dropped without an error. Names are at most 15
bytes. Defining a name twice in one frame is a `DUPLICATE DEFINITION`
error. A frame holds 32 variables.

## Example
```text
label main
def s "hi"
def x 0xff
print s
print x
ret

Running script...
variable: 's', value: "hi"
variable: 'x', value: 0xff
```

*/
