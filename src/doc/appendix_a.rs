/*!
# Errors and Limits

A fatal error prints its message with the line number and ends the run.

| Message | Cause |
|---|---|
| `SYNTAX ERROR IN n` | unknown statement, meta-command or `?` form |
| `OUT OF MEMORY IN n` | more than 65535 calls and loops open at once |

Two problems are reported in the output and the run carries on.
`DIVISION BY ZERO` gives -1 as the result. A missing `=`, `)` or closing
quote prints `SYNTAX ERROR IN n` and execution continues as if it had
been there.

Calls, condition loops and counted loops share one stack. `@=(` and `@=`
only pop a loop of their own kind from the top of the stack; with a call
on top they do nothing. `]` pops the nearest call and closes any loops
opened after it.

A loop body left with `#=` keeps its stack entry. The next `@=` still
returns to it unless a `]` closed it first.

*/
