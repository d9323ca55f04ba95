/*!
# `@` ... `@=(x)`

## Purpose
Repeat statements until x is nonzero.

## Remarks
`@` alone marks the top of the loop. `@=` followed by an opening
parenthesis tests the condition and jumps back to the mark while it is
zero, so the body always runs at least once. The loop may span lines.

An `@=(x)` with no open loop evaluates x and does nothing else.

## Example
```text
10 I=0 @ I=I+1 ?=I @=(I=3) /
```
Output:
```text
123
```

*/
