/*!
# `JL <line number>`

## Purpose
Jumps to the line when the last `CMP` found its first value less.
Otherwise execution continues on the next line.
*/
