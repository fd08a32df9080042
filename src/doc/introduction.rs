/*!
# Introductory Tutorial for BASM

BASM reads a program from a text file and runs it one line at a time.
Start the interpreter with the path of a program, or without one and
type the path when asked.

<pre><code>&nbsp;  $ basm countdown.asm
&nbsp;  [12:00:00][ASM] --- START PROGRAM ---
</code></pre>

Stop a running program with CTRL-C. Memory is still dumped afterwards.

## Lines

Each line holds one instruction: an opcode followed by its arguments,
separated by commas. Opcodes may be written in any case. Everything
after a `;` is a comment. Blank lines and comment lines do nothing,
but they still count when you jump to a line number.

<pre><code>&nbsp;  ; line 0 is this comment
&nbsp;  MOV 0x00, 3        ; line 1
&nbsp;  OUT 0x00           ; line 2
&nbsp;  ADD 0x00, -1       ; line 3
&nbsp;  CMP 0x00, 0        ; line 4
&nbsp;  JG 2               ; line 5
&nbsp;  RET
</code></pre>

Line numbers start at zero. Jumping past the last line ends the program
the same way `RET` does.

## Memory

There are 2048 memory cells, all zero when a program starts. An argument
starting with `0x` is the address of a cell, written in hexadecimal:
`0x0` and `0x00` are the same cell, `0x7ff` is the last one. Any other
argument is a literal value. A literal in double quotes loses its quotes.

A cell holds either an integer or text. `MOV` and `OUT` copy and print
whatever is there. `ADD` and `CMP` need integers and stop the program
with `TYPE MISMATCH` when a value is not one.

## The comparison flag

`CMP` sets a single flag to LESS, EQUAL or GREATER. `JG` and `JL` look
at it. The flag starts out EQUAL and keeps its value until the next `CMP`.

## Errors

Any error ends the program. The message names the line it happened on.

<pre><code>&nbsp;  ?ARGUMENT COUNT ERROR IN 4; MOV TAKES 2 ARGUMENTS BUT 1 GIVEN
</code></pre>
*/
