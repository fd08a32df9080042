/*!
# `ADD <address>, <value>`

## Purpose
Adds an integer value to the integer stored at an address.

## Remarks
Both the cell and the value must read as integers or a `TYPE MISMATCH`
error will occur. Text typed at an `INP` prompt counts when it is a
number. A sum that does not fit in 64 bits is an `OVERFLOW` error.

## Example
```text
MOV 0x00, 5
ADD 0x00, 3
OUT 0x00
```
*/
