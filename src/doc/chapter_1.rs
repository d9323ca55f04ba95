/*!
# Expressions and Types

There is one type: a signed 16-bit integer. All arithmetic wraps.
Variables are the letters `A` through `Z`, case-insensitive. A name
may be longer than one letter but only the first letter counts, so
`COUNT` and `C` are the same variable.

## Terms

| Term | Value |
|---|---|
| `123` | decimal constant |
| `$7F` | hexadecimal constant |
| `"AB"` | first character plus 256 times the second |
| `A` | variable |
| `A:i)` | byte at address `A+i` |
| `A(i)` | little-endian word at address `A+2*i` |
| `(expr)` | parenthesized expression |
| `$` | one byte from standard input, 0 at end of input |
| `?` | one line from standard input as a number |

A term that matches none of these is 0 and consumes nothing.

## Unary operators

| Operator | Result |
|---|---|
| `+x` | absolute value |
| `-x` | negation |
| `'x` | random number from 0 to x-1, or 0 if x is not positive |
| `#x` | 1 if x is zero, else 0 |
| `%x` | remainder of the last division; x is read and ignored |

## Binary operators

`+ - * /` and the comparisons `= <> < <= > >=`, which give 1 or 0.
All of them have the same precedence and group to the left.

```text
10 ?=2+3*4 /
20 ?=10/3 ?=%0 /
```
Output:
```text
20
31
```

Division by zero prints `DIVISION BY ZERO`, gives -1 and execution
carries on.

Spaces may come before a term but not before an operator. In
`?=1 +2` the expression is `1` and `+2` starts the next statement.

## Memory

The machine has 64K bytes of memory. A variable used with `:` or `(`
is the base address of an array. Addresses wrap around at 64K.

```text
10 A=$1000 A:0)=1 A:1)=2 ?=A(0) /
```
Output:
```text
513
```

*/
