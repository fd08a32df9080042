/*!
# `OUT <value>`

## Purpose
Prints a literal or the contents of an address on its own line.
*/
