/*!
# Meta-commands

Meta-commands are `*` followed by two letters in either case.
Any other pair of letters is a syntax error.
*/

pub mod LD {
    /*!
    ## `*LD filename` Load a new program.
    The rest of the line is the file name. The new text is used for
    every line lookup from now on, but the current line keeps running
    from the old text until the next jump. Variables, memory and pending
    calls and loops are kept. If the file can't be read nothing happens.
    ```text
    10 *LD part2.mp
    20 #=1
    ```
    */
}

pub mod QU {
    /*!
    ## `*QU` Exit successfully.
    */
}

pub mod TN {
    /*!
    ## `*TN` Trace on.
    Each line number is printed in brackets as its line starts.
    ```text
    10 *TN "a"
    20 "b"
    ```
    Output:
    ```text
    a[20]b
    ```
    */
}

pub mod TF {
    /*!
    ## `*TF` Trace off.
    */
}

pub mod FM {
    /*!
    ## `*FM=x` Set for-mode.
    When x is nonzero, a counted loop that starts past its limit skips
    its body. The `=` is optional.
    */
}

pub mod SH {
    /*!
    ## `*SH` Refused.
    Prints `Shell command not supported` and carries on.
    */
}
