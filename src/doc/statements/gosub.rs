/*!
# `!=x` and `]`

## Purpose
Call a subroutine at line x and return from it.

## Remarks
`!=` saves the current position then jumps like `#=`. `]` resumes
right after the `!=` statement that made the call. Loops opened in the
subroutine and still pending, such as a search loop left with `#=`, are
closed by the `]`. A `]` with no call pending does nothing.

The line number reported by trace and errors is not restored by `]`
until the next line starts.

## Example
```text
10 !=100 "b" !=100 /
20 *QU
100 "a" ]
```
Output:
```text
aba
```

*/
