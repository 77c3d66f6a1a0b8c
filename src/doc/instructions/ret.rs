/*!
# `ret`

## Purpose
Returns from the current call.

## Remarks
The callee's frame is discarded. A `ret` in the frame that started at
`main` ends the script. Running past the last line without one is an
`END OF SCRIPT` error.

## Example
```text
label main
ret
nop

Running script...
```

*/
