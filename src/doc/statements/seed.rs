/*!
# `'=x`

## Purpose
Reseed the random number generator.

## Remarks
The same seed always produces the same sequence from `'`. Without a
seed, every run is different.

## Example
```text
10 '=7 ?='100 '=7 ?='100 /
```

Prints the same number twice.

*/
