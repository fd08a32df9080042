/*!
# `RET [<code>]`

## Purpose
Ends the program and reports the return code.

## Remarks
Without a code the program ends with code 0, the same as `RET 0`.
The interpreter exits with the code.
*/
