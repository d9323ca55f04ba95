/*!
# `V=x`, `V:i)=x`, `V(i)=x`

## Purpose
Store a value into a variable, a byte of memory, or a word of memory.

## Remarks
The byte form stores the low 8 bits of x at address `V+i`. The word
form stores x little-endian at `V+2*i`. A scalar assignment followed by
`,limit` starts a counted loop. See `FOR`.

## Example
```text
10 A=$2000 A(3)=-1 ?=A:6) ?=A:7) /
```
Output:
```text
255255
```

*/
