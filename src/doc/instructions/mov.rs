/*!
# `MOV <address>, <value>`

## Purpose
Stores a value at an address. The value may be a literal or another address.

## Example
```text
MOV 0x00, hello
MOV 0x01, 0x00
OUT 0x01
```
*/
