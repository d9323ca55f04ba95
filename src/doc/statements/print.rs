/*!
# Output statements

| Statement | Output |
|---|---|
| `"text"` | the text |
| `/` | newline |
| `.=x` | x spaces |
| `?=x` | x in decimal |
| `??=x` | x as four hex digits |
| `?$=x` | low byte of x as two hex digits |
| `?(w)=x` | x right-justified in w columns, left if w is negative |
| `$=x` | low byte of x as a character |

Output is written and flushed after every statement.

## Example
```text
10 ??=255 .=1 ?$=-1 ?(4)=7 $=33 /
```
Output:
```text
00ff ff   7!
```

*/
