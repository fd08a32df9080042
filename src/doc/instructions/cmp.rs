/*!
# `CMP <value>, <value>`

## Purpose
Compares two integers and sets the flag to LESS, EQUAL or GREATER.

## Remarks
The first value is compared against the second: `CMP 5, 3` is GREATER.
Non-integer values are a `TYPE MISMATCH` error. Quotes around a literal
are removed before it is read as a number, so `CMP "5", 3` is GREATER too.
*/
