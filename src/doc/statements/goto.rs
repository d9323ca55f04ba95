/*!
# `#=x`

## Purpose
Continue execution at line x.

## Remarks
If line x doesn't exist, execution continues at the next line after it.
If there is no such line the program ends.

## Example
```text
10 #=25
20 "THIS WILL NOT PRINT"
30 "THIS WILL PRINT"
```

*/
