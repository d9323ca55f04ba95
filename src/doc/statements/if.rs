/*!
# `;=x`

## Purpose
Conditionally execute the rest of a line.

## Remarks
When x is zero the remaining statements on the line are skipped.

## Example
```text
10 A=? ;=A<0 "negative"/
20 "done"/
```

*/
