/*!
# `V=x,y` ... `@=z`

## Purpose
Count through a range of numbers.

## Remarks
Assigning x to V and following it with `,y` opens a counted loop with
limit y. `@=z` stores z into V and loops back to just after the limit
while V is not greater than y. The step is an ordinary expression,
usually `V+1`.

The body always runs once even if x is already past y, unless for-mode
is on (see `*FM`). With for-mode on, the body is skipped: execution
moves to the next `@` in the program, evaluates its step once and
continues after it.

A step whose result never exceeds the limit loops forever, so counting
down needs a condition loop instead.

## Example
```text
10 I=1,5 ?=I @=I+1 /
```
Output:
```text
12345
```

*/
