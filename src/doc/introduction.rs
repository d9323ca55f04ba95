/*!
# Introductory Tutorial for MIEP

MIEP programs are plain text files. Every line starts with a line
number and a single space, then a run of one character statements.
Save this as `hello.mp` and run it with `miep hello.mp`.

```text
10 "Hello World"/
```

The quoted string prints itself and `/` prints a newline. There is no
prompt and no direct mode. The interpreter starts at the first line
numbered 1 or more and keeps going until it runs off the end of the
file, reaches a line with no number, or meets `*QU`.

Statements don't need spaces between them, but a space is allowed
anywhere a statement may begin.

```text
10 A=6 B=7 ?=A*B /
20 *QU
```

Expressions are evaluated strictly left to right. There is no
precedence, so `2+3*4` is 20. Use parentheses when you mean otherwise.
A space ends an expression, which is why `?=A*B /` above works: the
space separates the expression from the newline statement. Without it,
`/` would divide.

Lines are found by number every time a jump happens, so `#=50` lands
on line 50 or, if it doesn't exist, the next line after it. A jump past
the last line ends the program.

```text
10 I=1
20 ?=I / I=I+1 ;=I<4 #=20
30 "done"/
```

The `;=` statement skips the rest of its line when its expression is
zero. This prints 1, 2 and 3, then "done".

A line whose number is not followed by a space is a comment and never
runs. A first line starting with `#` is skipped as well, so scripts may
start with a `#!` line.

```text
#!/usr/bin/env miep
10 "runs"/
20REM this line does not
```

*/
