/*!
# `INP <address>`

## Purpose
Shows the `Input: ` prompt and stores the line typed at an address.

## Remarks
The line is stored as text exactly as typed.
The program waits until a line is entered.
*/
