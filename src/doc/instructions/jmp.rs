/*!
# `JMP <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
Line numbers start at zero and count blank and comment lines. A line
number past the end of the program ends it. The line number may also be
read from an address.

## Example
```text
JMP 2
OUT "THIS WILL NOT PRINT"
OUT "THIS WILL PRINT"
```
*/
